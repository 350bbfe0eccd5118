use crate::list::{ExtList, ListCfg, ParamList, TokenList};

/// Raw value of one header field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct HeaderValue<'b> {
    /// Any bytes except CR and LF, as split out by the caller
    pub(crate) value: &'b [u8],
}

impl<'b> HeaderValue<'b> {
    #[inline]
    pub(crate) fn new(value: &'b [u8]) -> Self {
        Self { value }
    }

    #[inline]
    pub fn as_bytes<'s>(&'s self) -> &'b [u8]
    where
        'b: 's,
    {
        self.value
    }

    #[inline]
    pub fn token_list(&self) -> TokenList<'b> {
        TokenList::new(self.value)
    }

    #[inline]
    pub fn ext_list(&self) -> ExtList<'b> {
        ExtList::new(self.value)
    }

    #[inline]
    pub fn param_list(&self) -> ParamList<'b> {
        ParamList::new(self.value)
    }

    #[inline]
    pub fn token_list_with_cfg(&self, cfg: ListCfg) -> TokenList<'b> {
        TokenList::with_cfg(self.value, cfg)
    }

    #[inline]
    pub fn ext_list_with_cfg(&self, cfg: ListCfg) -> ExtList<'b> {
        ExtList::with_cfg(self.value, cfg)
    }
}

impl<'b> From<&'b http::HeaderValue> for HeaderValue<'b> {
    #[inline]
    fn from(value: &'b http::HeaderValue) -> Self {
        Self::new(value.as_bytes())
    }
}
