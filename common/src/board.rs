use chrono::TimeZone;

use crate::view::{cards, EditDraft, MemoCard};
use crate::{Memo, MemoId};

/// The fetched list plus the one card whose inline editor is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    memos: Vec<Memo>,
    editing: Option<EditDraft>,
}

impl Board {
    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    /// Swaps in a freshly fetched list. Any open editor is closed.
    pub fn replace(&mut self, memos: Vec<Memo>) {
        self.memos = memos;
        self.editing = None;
    }

    /// Opens the editor for `id`, moving it off any other card.
    ///
    /// Returns `None` when `id` is not on the board.
    pub fn begin_edit(&mut self, id: &MemoId) -> Option<&EditDraft> {
        let memo = self.memos.iter().find(|memo| &memo.id == id)?;
        self.editing = Some(EditDraft::from_memo(memo));
        self.editing.as_ref()
    }

    pub fn cancel_edit(&mut self) -> Option<EditDraft> {
        self.editing.take()
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn draft_for(&self, id: &MemoId) -> Option<&EditDraft> {
        self.editing.as_ref().filter(|draft| &draft.id == id)
    }

    pub fn cards<Tz>(&self, tz: &Tz) -> Vec<MemoCard>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        cards(&self.memos, tz)
    }
}
