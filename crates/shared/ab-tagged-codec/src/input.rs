use parity_scale_codec::{Error, Input};

/// Makes `&mut dyn Input` usable where `Decode::decode` requires a sized input
pub(crate) struct DynInput<'a>(pub(crate) &'a mut dyn Input);

impl Input for DynInput<'_> {
    #[inline(always)]
    fn remaining_len(&mut self) -> Result<Option<usize>, Error> {
        self.0.remaining_len()
    }

    #[inline(always)]
    fn read(&mut self, into: &mut [u8]) -> Result<(), Error> {
        self.0.read(into)
    }

    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, Error> {
        self.0.read_byte()
    }

    #[inline(always)]
    fn descend_ref(&mut self) -> Result<(), Error> {
        self.0.descend_ref()
    }

    #[inline(always)]
    fn ascend_ref(&mut self) {
        self.0.ascend_ref()
    }

    #[inline(always)]
    fn on_before_alloc_mem(&mut self, size: usize) -> Result<(), Error> {
        self.0.on_before_alloc_mem(size)
    }
}

/// Input that yields an already consumed first byte before the rest of the inner input.
///
/// SCALE inputs can't be peeked, so the byte read to check for a tag marker is put back this way
/// when it turns out to be the first byte of a legacy payload.
pub(crate) struct PrefixedInput<'a, I> {
    first: Option<u8>,
    inner: &'a mut I,
}

impl<'a, I> PrefixedInput<'a, I>
where
    I: Input,
{
    #[inline(always)]
    pub(crate) fn new(first: Option<u8>, inner: &'a mut I) -> Self {
        Self { first, inner }
    }
}

impl<I> Input for PrefixedInput<'_, I>
where
    I: Input,
{
    #[inline]
    fn remaining_len(&mut self) -> Result<Option<usize>, Error> {
        let prefix_len = usize::from(self.first.is_some());
        Ok(self
            .inner
            .remaining_len()?
            .map(|remaining| remaining + prefix_len))
    }

    #[inline]
    fn read(&mut self, into: &mut [u8]) -> Result<(), Error> {
        if into.is_empty() {
            return Ok(());
        }
        match self.first.take() {
            Some(first) => {
                into[0] = first;
                self.inner.read(&mut into[1..])
            }
            None => self.inner.read(into),
        }
    }

    #[inline]
    fn read_byte(&mut self) -> Result<u8, Error> {
        match self.first.take() {
            Some(first) => Ok(first),
            None => self.inner.read_byte(),
        }
    }

    #[inline(always)]
    fn descend_ref(&mut self) -> Result<(), Error> {
        self.inner.descend_ref()
    }

    #[inline(always)]
    fn ascend_ref(&mut self) {
        self.inner.ascend_ref()
    }

    #[inline(always)]
    fn on_before_alloc_mem(&mut self, size: usize) -> Result<(), Error> {
        self.inner.on_before_alloc_mem(size)
    }
}
