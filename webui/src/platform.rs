//! Browser implementations of the assembler's collaborators.

use crate::prelude::*;

/// Writes through `navigator.clipboard.writeText`.
///
/// The api is looked up at runtime because it is missing from insecure contexts.
/// The returned promise is awaited in the background and a rejection is logged.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) -> Result<(), ActionError> {
        let navigator = wndw()?.navigator();
        let clipboard = get(&navigator, &"clipboard".into()).map_err(|e| ActionError::Clipboard(format!("{e:?}")))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ActionError::Unavailable("navigator.clipboard"));
        }
        let write_text = get(&clipboard, &"writeText".into()).map_err(|e| ActionError::Clipboard(format!("{e:?}")))?;
        let write_text = write_text
            .dyn_ref::<Function>()
            .ok_or(ActionError::Unavailable("navigator.clipboard.writeText"))?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| ActionError::Clipboard(format!("{e:?}")))?;
        let promise: Promise = promise
            .dyn_into()
            .map_err(|v| ActionError::Clipboard(format!("writeText returned {v:?}")))?;

        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => debug!("Query copied to clipboard"),
                Err(e) => error!("Clipboard write was rejected: {e:?}"),
            }
        });
        Ok(())
    }
}

/// Opens searches with `window.open`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_new_context(&self, url: &str, target: &str) -> Result<(), ActionError> {
        match wndw()?.open_with_url_and_target(url, target) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ActionError::Navigation(String::from("the popup was blocked"))),
            Err(e) => Err(ActionError::Navigation(format!("{e:?}"))),
        }
    }
}
