macro_rules! bail {
    ($offset:expr, $reason:expr) => {{
        trace!(offset = $offset, reason = $reason, "malformed");
        return Err(MalformedError::new($offset, $reason));
    }};
}

macro_rules! byte_map {
    ($($flag:expr,)*) => ([
        $($flag != 0,)*
    ])
}
