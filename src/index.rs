/// Position in the filtered contact view. Stored zero-based; users type
/// one-based numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(usize);

impl Index {
  pub fn from_zero_based(index: usize) -> Self {
    Self(index)
  }

  pub fn from_one_based(index: usize) -> Option<Self> {
    index.checked_sub(1).map(Self)
  }

  pub fn zero_based(&self) -> usize {
    self.0
  }

  pub fn one_based(&self) -> usize {
    self.0 + 1
  }
}
