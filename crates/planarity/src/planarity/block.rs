//! Blocks of the strong-planarity test.
//!
//! A block bundles the still-unresolved segments hanging off the current spine
//! together with their attachments (DFS numbers of spine ancestors). Attachment
//! lists are kept highest-first, so `front()` is the highest attachment and
//! `back()` the lowest.

use std::collections::VecDeque;

use crate::graph::Side;

#[derive(Debug, Default)]
pub(super) struct Block {
    latt: VecDeque<usize>,
    ratt: VecDeque<usize>,
    lseg: Vec<usize>,
    rseg: Vec<usize>,
}

impl Block {
    pub fn new(e: usize, att: VecDeque<usize>) -> Self {
        Self {
            latt: att,
            ratt: VecDeque::new(),
            lseg: vec![e],
            rseg: Vec::new(),
        }
    }

    pub fn flip(&mut self) {
        std::mem::swap(&mut self.latt, &mut self.ratt);
        std::mem::swap(&mut self.lseg, &mut self.rseg);
    }

    /// Our lowest attachment lies below the highest left attachment of `top`.
    pub fn left_interlace(&self, top: Option<&Block>) -> bool {
        match (self.latt.back(), top.and_then(|t| t.latt.front())) {
            (Some(low), Some(high)) => low < high,
            _ => false,
        }
    }

    /// Our lowest attachment lies below the highest right attachment of `top`.
    pub fn right_interlace(&self, top: Option<&Block>) -> bool {
        match (self.latt.back(), top.and_then(|t| t.ratt.front())) {
            (Some(low), Some(high)) => low < high,
            _ => false,
        }
    }

    /// Absorb `other` (the block below us on the stack).
    pub fn combine(&mut self, mut other: Block) {
        self.latt.append(&mut other.latt);
        self.ratt.append(&mut other.ratt);
        self.lseg.append(&mut other.lseg);
        self.rseg.append(&mut other.rseg);
    }

    /// Drop attachments equal to `dfs_w`. If nothing else remains, the block is
    /// resolved: its segments are committed to their sides and `true` returned.
    pub fn clean(&mut self, dfs_w: usize, alpha: &mut [Side]) -> bool {
        while self.latt.front() == Some(&dfs_w) {
            self.latt.pop_front();
        }
        while self.ratt.front() == Some(&dfs_w) {
            self.ratt.pop_front();
        }
        if !self.latt.is_empty() || !self.ratt.is_empty() {
            return false;
        }
        self.commit(alpha);
        true
    }

    /// Both sides still reach strictly above `dfs_w0`.
    pub fn straddles(&self, dfs_w0: usize) -> bool {
        matches!(
            (self.latt.front(), self.ratt.front()),
            (Some(&l), Some(&r)) if l > dfs_w0 && r > dfs_w0
        )
    }

    /// Append our attachments to `att`, flipping first so that the right side
    /// attaches only at `dfs_w0`.
    pub fn add_to_att(mut self, att: &mut VecDeque<usize>, dfs_w0: usize, alpha: &mut [Side]) {
        if self.ratt.front().is_some_and(|&r| r > dfs_w0) {
            self.flip();
        }
        att.append(&mut self.latt);
        att.append(&mut self.ratt);
        self.commit(alpha);
    }

    fn commit(&self, alpha: &mut [Side]) {
        for &e in &self.lseg {
            alpha[e] = Side::Left;
        }
        for &e in &self.rseg {
            alpha[e] = Side::Right;
        }
    }
}
