use crate::list::ListCfg;

#[derive(Debug, Default)]
#[non_exhaustive]
pub struct ListCfgBuilder {
    max_elements: Option<usize>,
    max_params: Option<usize>,
}

impl ListCfgBuilder {
    #[inline]
    pub fn max_elements(mut self, n: usize) -> Self {
        self.max_elements = Some(n);
        self
    }

    #[inline]
    pub fn max_params(mut self, n: usize) -> Self {
        self.max_params = Some(n);
        self
    }

    pub fn build(self) -> ListCfg {
        let dflt = ListCfg::default();
        ListCfg {
            max_elements: self.max_elements.unwrap_or(dflt.max_elements),
            max_params: self.max_params.unwrap_or(dflt.max_params),
        }
    }
}
