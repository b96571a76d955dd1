use crate::prelude::*;

/// The syntax a fragment is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Exact,
    Exclude,
    Site,
    Filetype,
    Intitle,
    Inurl,
    Intext,
    /// Plain word(s), rendered verbatim.
    ///
    /// Unknown kind names deserialize to this variant so their value is kept as-is.
    /// serde requires it to stay the last variant.
    #[serde(other)]
    Keyword,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 8] = [
        FragmentKind::Keyword,
        FragmentKind::Exact,
        FragmentKind::Exclude,
        FragmentKind::Site,
        FragmentKind::Filetype,
        FragmentKind::Intitle,
        FragmentKind::Inurl,
        FragmentKind::Intext,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FragmentKind::Keyword => "keyword",
            FragmentKind::Exact => "exact",
            FragmentKind::Exclude => "exclude",
            FragmentKind::Site => "site",
            FragmentKind::Filetype => "filetype",
            FragmentKind::Intitle => "intitle",
            FragmentKind::Inurl => "inurl",
            FragmentKind::Intext => "intext",
        }
    }

    /// Parses a kind name, falling back to [`FragmentKind::Keyword`] for anything unknown.
    pub fn from_name(name: &str) -> FragmentKind {
        FragmentKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(FragmentKind::Keyword)
    }

    pub fn render(&self, value: &str) -> String {
        match self {
            FragmentKind::Keyword => value.to_string(),
            FragmentKind::Exact => format!("\"{value}\""),
            FragmentKind::Exclude => format!("-{value}"),
            FragmentKind::Site => format!("site:{value}"),
            FragmentKind::Filetype => format!("filetype:{value}"),
            FragmentKind::Intitle => format!("intitle:{value}"),
            FragmentKind::Inurl => format!("inurl:{value}"),
            FragmentKind::Intext => format!("intext:{value}"),
        }
    }
}

impl std::fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies a fragment inside the assembler that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FragmentId(pub(crate) u64);

impl std::fmt::Display for FragmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fragment-{}", self.0)
    }
}

/// One piece of the query, as entered by the user.
/// The value is always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    id: FragmentId,
    kind: FragmentKind,
    value: String,
}

impl Fragment {
    /// Returns `None` if `raw_value` is empty once trimmed.
    pub(crate) fn new(id: FragmentId, kind: FragmentKind, raw_value: &str) -> Option<Fragment> {
        let value = raw_value.trim();
        if value.is_empty() {
            return None;
        }
        Some(Fragment {
            id,
            kind,
            value: value.to_string(),
        })
    }

    pub fn id(&self) -> FragmentId {
        self.id
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn render(&self) -> String {
        self.kind.render(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_table() {
        let expected = [
            (FragmentKind::Keyword, "React"),
            (FragmentKind::Exact, "\"React\""),
            (FragmentKind::Exclude, "-React"),
            (FragmentKind::Site, "site:React"),
            (FragmentKind::Filetype, "filetype:React"),
            (FragmentKind::Intitle, "intitle:React"),
            (FragmentKind::Inurl, "inurl:React"),
            (FragmentKind::Intext, "intext:React"),
        ];
        for (kind, token) in expected {
            assert_eq!(kind.render("React"), token, "{kind}");
        }
    }

    #[test]
    fn fragment_value_is_trimmed() {
        let fragment = Fragment::new(FragmentId(0), FragmentKind::Exact, "  a b \n").unwrap();
        assert_eq!(fragment.value(), "a b");
        assert_eq!(fragment.render(), "\"a b\"");

        assert!(Fragment::new(FragmentId(1), FragmentKind::Site, " \t ").is_none());
        assert!(Fragment::new(FragmentId(2), FragmentKind::Site, "").is_none());
    }

    #[test]
    fn names() {
        for kind in FragmentKind::ALL {
            assert_eq!(FragmentKind::from_name(kind.name()), kind);
        }
        assert_eq!(FragmentKind::from_name("allintitle"), FragmentKind::Keyword);
        assert_eq!(FragmentKind::from_name(""), FragmentKind::Keyword);
    }

    #[test]
    fn serde_names() {
        for kind in FragmentKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            assert_eq!(serde_json::from_str::<FragmentKind>(&json).unwrap(), kind);
        }
        let unknown: FragmentKind = serde_json::from_str("\"cache\"").unwrap();
        assert_eq!(unknown, FragmentKind::Keyword);
        assert_eq!(unknown.render("example.com"), "example.com");
    }
}
