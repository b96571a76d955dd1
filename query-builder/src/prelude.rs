pub use crate::{
    actions::{search_url, ActionError, Clipboard, Navigator},
    assembler::{Change, QueryAssembler, SubscriptionId},
    catalog::*,
    config::BuilderConfig,
    fragment::{Fragment, FragmentId, FragmentKind},
};
pub(crate) use log::{debug, info, trace, warn};
pub(crate) use serde::{Deserialize, Serialize};
