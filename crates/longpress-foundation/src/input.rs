use smallvec::SmallVec;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// One or more pointers made contact.
    Down,
    /// The pointers were lifted.
    Up,
    /// The platform took the contact away (e.g. a system gesture).
    Cancel,
}

/// A contact-lifecycle event for the pointers that changed together.
///
/// Movement is not tracked; a press is judged on timing alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointers: SmallVec<[PointerId; 2]>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, pointers: impl IntoIterator<Item = PointerId>) -> Self {
        Self {
            kind,
            pointers: pointers.into_iter().collect(),
        }
    }

    pub fn down(id: PointerId) -> Self {
        Self::new(PointerEventKind::Down, [id])
    }

    /// Several pointers touching down in the same event.
    pub fn down_many(ids: impl IntoIterator<Item = PointerId>) -> Self {
        Self::new(PointerEventKind::Down, ids)
    }

    pub fn up(id: PointerId) -> Self {
        Self::new(PointerEventKind::Up, [id])
    }

    pub fn cancel(id: PointerId) -> Self {
        Self::new(PointerEventKind::Cancel, [id])
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}
