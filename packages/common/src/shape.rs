use crate::EntityKind;

/// A partial record that can be resolved into its complete form.
///
/// Every absent field takes its type's default (0, `""`, `false`); present
/// values are carried over untouched. The conversion is total and pure.
///
/// `Complete` must convert back into `Self` so a complete record can always be
/// fed through the normalizer again.
pub trait Normalize: Sized {
    /// Fully populated counterpart of this partial record.
    type Complete: From<Self> + Into<Self>;

    /// Entity kind this shape belongs to.
    const KIND: EntityKind;

    fn normalize(self) -> Self::Complete {
        From::from(self)
    }
}

/// Partial update of a complete record.
///
/// Only fields present in the patch are written; everything else keeps its
/// current value.
pub trait Patch<P> {
    fn apply(&mut self, patch: P);
}

/// Overwrite `slot` when `value` is present.
#[inline]
pub fn set_if_present<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
