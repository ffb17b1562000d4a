/// Identifies one network request issued by a flow.
///
/// Responses carry the id they were issued with; a flow applies a response only
/// while that id is still the one it is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Monotonic source of [`RequestId`]s, one per flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSeq {
    next: u64,
}

impl RequestSeq {
    pub fn next_id(&mut self) -> RequestId {
        let id = RequestId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
