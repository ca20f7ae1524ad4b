//! Second pass: strong planarity of segments, on an explicit frame stack.
//!
//! For a tree dart `e0 = (x, y)` the segment `S(e0)` is walked along its spine
//! (first darts from `y` until a back dart into `w0`). Walking the spine
//! upwards, every non-first dart of a spine node contributes a block: the
//! attachments of a child segment (tree dart, computed by a nested frame) or
//! the single target of a back dart. Blocks are merged on a stack with
//! flip/interlace checks and cleaned once they only attach at the parent of the
//! current spine node. Whatever remains is drained into the attachment list
//! handed back to the enclosing frame.

use std::collections::VecDeque;

use super::block::Block;
use super::darts::Darts;
use super::reorder::Dfs;
use crate::error::{GraphError, Result};
use crate::graph::Side;

struct Segment {
    x: usize,
    w0: usize,
    /// Current spine node, climbing from the spine's end towards `x`.
    w: usize,
    next: usize,
    blocks: Vec<Block>,
    /// Tree dart whose nested segment is being tested.
    pending: Option<usize>,
}

enum Step {
    Descend(usize),
    Finished,
    NonPlanar,
}

struct Cx<'a> {
    darts: &'a Darts,
    dfs: &'a Dfs,
    alpha: &'a mut [Side],
}

/// Test strong planarity of `S(e0)`, recording block sides in `alpha`.
///
/// Returns `Ok(false)` for a non-planar segment; errors only on broken
/// invariants of the reordered graph.
pub(super) fn strongly_planar(
    e0: usize,
    darts: &Darts,
    dfs: &Dfs,
    alpha: &mut [Side],
) -> Result<bool> {
    let mut cx = Cx { darts, dfs, alpha };
    let mut frames = vec![Segment::enter(e0, &cx)?];
    let mut returned: Option<VecDeque<usize>> = None;

    while let Some(seg) = frames.last_mut() {
        if let Some(att) = returned.take() {
            let e = seg
                .pending
                .take()
                .ok_or_else(|| GraphError::Invariant("child segment without parent dart".into()))?;
            if !seg.absorb(Block::new(e, att)) {
                return Ok(false);
            }
        }
        match seg.advance(&mut cx)? {
            Step::Descend(e) => {
                seg.pending = Some(e);
                let child = Segment::enter(e, &cx)?;
                frames.push(child);
            }
            Step::NonPlanar => return Ok(false),
            Step::Finished => {
                let Some(done) = frames.pop() else { break };
                match done.attachments(&mut cx) {
                    Some(att) => returned = Some(att),
                    None => return Ok(false),
                }
            }
        }
    }
    Ok(true)
}

impl Segment {
    fn enter(e0: usize, cx: &Cx<'_>) -> Result<Self> {
        let (darts, dfs) = (cx.darts, cx.dfs);
        let mut wk = darts.dst[e0];
        let mut e = dfs.first(wk)?;
        while dfs.num[darts.dst[e]] > dfs.num[wk] {
            wk = darts.dst[e];
            e = dfs.first(wk)?;
        }
        Ok(Self {
            x: darts.src[e0],
            w0: darts.dst[e],
            w: wk,
            next: 1,
            blocks: Vec::new(),
            pending: None,
        })
    }

    fn advance(&mut self, cx: &mut Cx<'_>) -> Result<Step> {
        let (darts, dfs) = (cx.darts, cx.dfs);
        while self.w != self.x {
            if let Some(&e) = dfs.adj[self.w].get(self.next) {
                self.next += 1;
                if dfs.is_tree(darts, e) {
                    return Ok(Step::Descend(e));
                }
                let att = VecDeque::from([dfs.num[darts.dst[e]]]);
                if !self.absorb(Block::new(e, att)) {
                    return Ok(Step::NonPlanar);
                }
                continue;
            }
            let p = darts.src[dfs.parent_dart(self.w)?];
            let dfs_p = dfs.num[p];
            while let Some(top) = self.blocks.last_mut() {
                if !top.clean(dfs_p, cx.alpha) {
                    break;
                }
                self.blocks.pop();
            }
            self.w = p;
            self.next = 1;
        }
        Ok(Step::Finished)
    }

    /// Merge `b` onto the block stack; `false` if the segment is non-planar.
    fn absorb(&mut self, mut b: Block) -> bool {
        loop {
            if b.left_interlace(self.blocks.last()) {
                if let Some(top) = self.blocks.last_mut() {
                    top.flip();
                }
            }
            if b.left_interlace(self.blocks.last()) {
                return false;
            }
            if !b.right_interlace(self.blocks.last()) {
                break;
            }
            if let Some(top) = self.blocks.pop() {
                b.combine(top);
            }
        }
        self.blocks.push(b);
        true
    }

    /// Drain the block stack into this segment's attachment list.
    fn attachments(mut self, cx: &mut Cx<'_>) -> Option<VecDeque<usize>> {
        let dfs_w0 = cx.dfs.num[self.w0];
        let mut att = VecDeque::new();
        while let Some(b) = self.blocks.pop() {
            if b.straddles(dfs_w0) {
                return None;
            }
            b.add_to_att(&mut att, dfs_w0, cx.alpha);
        }
        if self.w0 != self.x {
            att.push_back(dfs_w0);
        }
        Some(att)
    }
}
