//! Embedding pass: turn the side assignment `alpha` into a rotation system.
//!
//! Mirrors the strong-planarity spine walk. Each segment frame keeps
//! - `t`: darts leaving the current spine node, in final rotation order,
//! - `al` / `ar`: darts leaving spine ancestors, deferred to the caller on the
//!   left / right side.
//! A child segment's `(t', a')` is spliced in front of or behind ours depending
//! on whether its side agrees with our orientation. When a spine node is done,
//! its `t` list is numbered from a counter shared by the whole pass; sorting
//! darts by that number and grouping by source yields every rotation.

use std::collections::VecDeque;

use super::darts::Darts;
use super::reorder::Dfs;
use crate::error::{GraphError, Result};
use crate::graph::Side;

/// Shared numbering state threaded through all frames.
struct Numbering {
    sort_num: Vec<usize>,
    next: usize,
}

impl Numbering {
    fn commit(&mut self, list: &mut VecDeque<usize>) {
        for d in list.drain(..) {
            self.sort_num[d] = self.next;
            self.next += 1;
        }
    }
}

struct Segment {
    x: usize,
    w: usize,
    side: Side,
    back_into_w0: usize,
    next: usize,
    t: VecDeque<usize>,
    al: VecDeque<usize>,
    ar: VecDeque<usize>,
    pending: Option<usize>,
}

enum Step {
    Descend(usize, Side),
    Finished,
}

/// Rotation numbers for every dart, starting from the root's first tree dart.
pub(super) fn embedding(e0: usize, darts: &Darts, dfs: &Dfs, alpha: &[Side]) -> Result<Vec<usize>> {
    let mut num = Numbering {
        sort_num: vec![usize::MAX; darts.dart_count()],
        next: 0,
    };
    let mut frames = vec![Segment::enter(e0, Side::Left, darts, dfs)?];
    let mut returned: Option<(VecDeque<usize>, VecDeque<usize>)> = None;

    while let Some(seg) = frames.last_mut() {
        if let Some((t1, a1)) = returned.take() {
            let e = seg
                .pending
                .take()
                .ok_or_else(|| GraphError::Invariant("child segment without parent dart".into()))?;
            seg.splice(e, t1, a1, alpha);
        }
        match seg.advance(darts, dfs, alpha, &mut num)? {
            Step::Descend(e, side) => {
                seg.pending = Some(e);
                let child = Segment::enter(e, side, darts, dfs)?;
                frames.push(child);
            }
            Step::Finished => {
                let Some(done) = frames.pop() else { break };
                returned = Some(done.output(darts));
            }
        }
    }

    // At the root: darts leaving the root, then the deferred ones (all leave
    // the root as well).
    let (mut t, mut a) = returned
        .ok_or_else(|| GraphError::Invariant("embedding produced no root lists".into()))?;
    t.append(&mut a);
    num.commit(&mut t);
    if let Some(d) = num.sort_num.iter().position(|&k| k == usize::MAX) {
        return Err(GraphError::Invariant(format!("dart #{d} was never placed")));
    }
    Ok(num.sort_num)
}

impl Segment {
    fn enter(e0: usize, side: Side, darts: &Darts, dfs: &Dfs) -> Result<Self> {
        let mut wk = darts.dst[e0];
        let mut e = dfs.first(wk)?;
        while dfs.num[darts.dst[e]] > dfs.num[wk] {
            wk = darts.dst[e];
            e = dfs.first(wk)?;
        }
        Ok(Self {
            x: darts.src[e0],
            w: wk,
            side,
            back_into_w0: e,
            next: 1,
            t: VecDeque::from([e]),
            al: VecDeque::new(),
            ar: VecDeque::new(),
            pending: None,
        })
    }

    fn advance(
        &mut self,
        darts: &Darts,
        dfs: &Dfs,
        alpha: &[Side],
        num: &mut Numbering,
    ) -> Result<Step> {
        while self.w != self.x {
            if let Some(&e) = dfs.adj[self.w].get(self.next) {
                self.next += 1;
                if dfs.is_tree(darts, e) {
                    let side = if self.side == alpha[e] {
                        Side::Left
                    } else {
                        Side::Right
                    };
                    return Ok(Step::Descend(e, side));
                }
                let t1 = VecDeque::from([e]);
                let a1 = VecDeque::from([darts.rev[e]]);
                self.splice(e, t1, a1, alpha);
                continue;
            }

            // `w`'s rotation is complete once the dart back to its parent is in.
            let into = dfs.parent_dart(self.w)?;
            self.t.push_back(darts.rev[into]);
            num.commit(&mut self.t);

            // Seed the parent's list with the deferred darts that leave it:
            // the rear of `al` and the front of `ar`.
            let p = darts.src[into];
            while self.al.back().is_some_and(|&d| darts.src[d] == p) {
                if let Some(d) = self.al.pop_back() {
                    self.t.push_front(d);
                }
            }
            self.t.push_back(into);
            while self.ar.front().is_some_and(|&d| darts.src[d] == p) {
                if let Some(d) = self.ar.pop_front() {
                    self.t.push_back(d);
                }
            }
            self.w = p;
            self.next = 1;
        }
        Ok(Step::Finished)
    }

    fn splice(
        &mut self,
        e: usize,
        mut t1: VecDeque<usize>,
        mut a1: VecDeque<usize>,
        alpha: &[Side],
    ) {
        if self.side == alpha[e] {
            // t = t1 ++ t, al = al ++ a1
            t1.append(&mut self.t);
            self.t = t1;
            self.al.append(&mut a1);
        } else {
            // t = t ++ t1, ar = a1 ++ ar
            self.t.append(&mut t1);
            a1.append(&mut self.ar);
            self.ar = a1;
        }
    }

    fn output(mut self, darts: &Darts) -> (VecDeque<usize>, VecDeque<usize>) {
        let mut a = std::mem::take(&mut self.ar);
        a.push_back(darts.rev[self.back_into_w0]);
        a.append(&mut self.al);
        (self.t, a)
    }
}
