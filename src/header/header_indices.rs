/// Positions of one header inside a header block.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub(crate) struct HeaderIndices {
    pub(crate) name: (usize, usize),
    pub(crate) value: (usize, usize),
}

impl HeaderIndices {
    /// Locates `name` and `value`, both slices of `buf`.
    #[inline]
    pub(crate) fn locate(buf: &[u8], name: &[u8], value: &[u8]) -> Self {
        let base = buf.as_ptr() as usize;
        let name_start = name.as_ptr() as usize - base;
        let value_start = value.as_ptr() as usize - base;
        Self {
            name: (name_start, name_start + name.len()),
            value: (value_start, value_start + value.len()),
        }
    }
}
