use crate::list::ListCfgBuilder;

/// Limits applied while iterating a list.
///
/// Anything beyond a limit is handled like malformed trailing data: the
/// iteration ends there.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub struct ListCfg {
    /// Maximum number of elements produced by a token or extension list.
    pub max_elements: usize,
    /// Maximum number of parameters produced by one parameter list.
    pub max_params: usize,
}

impl ListCfg {
    #[inline]
    pub fn builder() -> ListCfgBuilder {
        ListCfgBuilder::default()
    }
}

impl Default for ListCfg {
    #[inline]
    fn default() -> Self {
        Self {
            max_elements: usize::MAX,
            max_params: usize::MAX,
        }
    }
}
