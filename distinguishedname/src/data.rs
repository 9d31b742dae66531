use crate::error::{DnError, Result};

/// Split an `ATTR=value` string at its first `=`.
pub fn split_ava(ava: &str) -> Option<(&str, &str)> {
    ava.split_once('=')
}

/// One level of a DN: one or more `ATTR=value` strings, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rdn {
    avas: Vec<String>,
}

impl Rdn {
    /// Build an RDN from pair strings. Every pair must contain `=`.
    pub fn new(avas: Vec<String>) -> Result<Self> {
        if avas.is_empty() {
            return Err(DnError::EmptyRdn);
        }
        if let Some(bad) = avas.iter().find(|ava| !ava.contains('=')) {
            return Err(DnError::MissingSeparator(bad.clone()));
        }
        Ok(Rdn { avas })
    }

    /// The parser only ever produces non-empty, `=`-bearing pairs.
    pub(crate) fn from_parsed(avas: Vec<String>) -> Self {
        debug_assert!(!avas.is_empty());
        Rdn { avas }
    }

    pub fn avas(&self) -> &[String] {
        &self.avas
    }

    pub fn len(&self) -> usize {
        self.avas.len()
    }

    pub fn is_multi_valued(&self) -> bool {
        self.avas.len() > 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.avas.iter()
    }

    /// `(name, value)` for each pair.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.avas.iter().filter_map(|ava| split_ava(ava))
    }

    pub fn into_vec(self) -> Vec<String> {
        self.avas
    }
}

impl<'a> IntoIterator for &'a Rdn {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.avas.iter()
    }
}

/// A distinguished name: RDNs ordered from most to least specific.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dn {
    rdns: Vec<Rdn>,
}

impl Dn {
    pub fn new(rdns: Vec<Rdn>) -> Result<Self> {
        if rdns.is_empty() {
            return Err(DnError::EmptyDn);
        }
        Ok(Dn { rdns })
    }

    pub(crate) fn from_parsed(rdns: Vec<Rdn>) -> Self {
        debug_assert!(!rdns.is_empty());
        Dn { rdns }
    }

    pub fn rdns(&self) -> &[Rdn] {
        &self.rdns
    }

    pub fn len(&self) -> usize {
        self.rdns.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rdn> {
        self.rdns.iter()
    }

    /// The most specific RDN.
    pub fn first(&self) -> &Rdn {
        &self.rdns[0]
    }

    /// The DN with its first RDN removed, or `None` if only one RDN remains.
    pub fn parent(&self) -> Option<Dn> {
        if self.rdns.len() < 2 {
            return None;
        }
        Some(Dn {
            rdns: self.rdns[1..].to_vec(),
        })
    }

    pub fn into_vec(self) -> Vec<Vec<String>> {
        self.rdns.into_iter().map(Rdn::into_vec).collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for Dn {
    type Error = DnError;

    fn try_from(rdns: Vec<Vec<String>>) -> Result<Self> {
        let rdns = rdns.into_iter().map(Rdn::new).collect::<Result<Vec<_>>>()?;
        Dn::new(rdns)
    }
}

impl IntoIterator for Dn {
    type Item = Rdn;
    type IntoIter = std::vec::IntoIter<Rdn>;

    fn into_iter(self) -> Self::IntoIter {
        self.rdns.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dn {
    type Item = &'a Rdn;
    type IntoIter = std::slice::Iter<'a, Rdn>;

    fn into_iter(self) -> Self::IntoIter {
        self.rdns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(avas: &[&str]) -> Vec<String> {
        avas.iter().map(|s| s.to_string()).collect()
    }

    fn make_dn(rdns: &[&[&str]]) -> Dn {
        Dn::try_from(rdns.iter().map(|r| strings(r)).collect::<Vec<_>>()).unwrap()
    }

    // ── Group 1: construction ───────────────────────────────────

    #[test]
    fn rdn_new_accepts_pairs() {
        let rdn = Rdn::new(strings(&["OU=Spectre", "UID=1234"])).unwrap();
        assert_eq!(rdn.len(), 2);
        assert!(rdn.is_multi_valued());
    }

    #[test]
    fn rdn_new_rejects_empty() {
        assert_eq!(Rdn::new(vec![]), Err(DnError::EmptyRdn));
    }

    #[test]
    fn rdn_new_rejects_missing_separator() {
        assert_eq!(
            Rdn::new(strings(&["CN=a", "nonsense"])),
            Err(DnError::MissingSeparator("nonsense".into()))
        );
    }

    #[test]
    fn dn_new_rejects_empty() {
        assert_eq!(Dn::new(vec![]), Err(DnError::EmptyDn));
    }

    #[test]
    fn try_from_nested_vec() {
        let dn = make_dn(&[&["CN=James Bond"], &["OU=Spectre", "UID=1234"], &["C=US"]]);
        assert_eq!(dn.len(), 3);
        assert_eq!(dn.rdns()[1].avas(), &["OU=Spectre", "UID=1234"]);
    }

    #[test]
    fn try_from_propagates_rdn_error() {
        let err = Dn::try_from(vec![vec!["CN=a".to_string()], vec![]]).unwrap_err();
        assert_eq!(err, DnError::EmptyRdn);
    }

    // ── Group 2: accessors ──────────────────────────────────────

    #[test]
    fn split_ava_uses_first_equals() {
        assert_eq!(split_ava("CN=a=b"), Some(("CN", "a=b")));
        assert_eq!(split_ava("CN="), Some(("CN", "")));
        assert_eq!(split_ava("CN"), None);
    }

    #[test]
    fn rdn_attributes() {
        let rdn = Rdn::new(strings(&["OU=Spectre", "UID=1234"])).unwrap();
        let attrs: Vec<_> = rdn.attributes().collect();
        assert_eq!(attrs, vec![("OU", "Spectre"), ("UID", "1234")]);
    }

    #[test]
    fn first_and_parent() {
        let dn = make_dn(&[&["CN=foo"], &["DC=example"], &["DC=com"]]);
        assert_eq!(dn.first().avas(), &["CN=foo"]);
        let parent = dn.parent().unwrap();
        assert_eq!(parent, make_dn(&[&["DC=example"], &["DC=com"]]));
        let top = parent.parent().unwrap();
        assert_eq!(top.parent(), None);
    }

    #[test]
    fn into_vec_round_trips() {
        let nested = vec![strings(&["CN=a"]), strings(&["OU=b", "UID=c"])];
        let dn = Dn::try_from(nested.clone()).unwrap();
        assert_eq!(dn.into_vec(), nested);
    }

    #[test]
    fn iterates_in_order() {
        let dn = make_dn(&[&["CN=a"], &["OU=b"]]);
        let firsts: Vec<&str> = dn.iter().map(|rdn| rdn.avas()[0].as_str()).collect();
        assert_eq!(firsts, vec!["CN=a", "OU=b"]);
        let owned: Vec<Rdn> = dn.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
