use crate::{Error, Result};

/// Nesting depth against an optional limit. `None` = unbounded.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Depth {
    current: u32,
    limit: Option<u32>,
}

impl Depth {
    pub(crate) fn new(limit: Option<u32>) -> Self {
        Self { current: 0, limit }
    }

    pub(crate) fn enter(&mut self) -> Result<()> {
        if let Some(limit) = self.limit
            && self.current >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.current += 1;
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}
