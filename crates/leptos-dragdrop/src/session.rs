//! Drag Session State Machine
//!
//! Mouse: Idle -> Pending (pressed) -> Active (moved past threshold) -> Idle.
//! Keyboard: Idle -> Active (Space/Enter on the handle) -> Idle.
//! Pure transitions, so the DOM glue in `lib.rs` stays thin.

/// Where a drag currently stands
#[derive(Clone, Debug, PartialEq)]
pub enum DragSession<K> {
    Idle,
    /// Mouse is down on an item but has not moved far enough yet
    Pending { id: K, origin: (i32, i32) },
    /// Item is lifted. `pointer` is `None` for a keyboard drag.
    Active {
        id: K,
        over: Option<K>,
        pointer: Option<(i32, i32)>,
    },
}

/// How a session ended
#[derive(Clone, Debug, PartialEq)]
pub enum DragOutcome<K> {
    /// Released over a drop target
    Dropped { active: K, over: K },
    /// Released over nothing, or aborted with Escape
    Cancelled { active: K },
    /// Released before the threshold was crossed
    Clicked { id: K },
    /// Nothing was being dragged
    Ignored,
}

/// Arrow key direction during a keyboard drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

/// Keys a drag handle reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKey {
    /// Space or Enter: lift when idle, drop when lifted
    Activate,
    Cancel,
    Step(Step),
}

impl DragKey {
    /// Map a `KeyboardEvent::key()` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" | "Enter" => Some(DragKey::Activate),
            "Escape" | "Esc" => Some(DragKey::Cancel),
            "ArrowUp" => Some(DragKey::Step(Step::Up)),
            "ArrowDown" => Some(DragKey::Step(Step::Down)),
            "ArrowLeft" => Some(DragKey::Step(Step::Left)),
            "ArrowRight" => Some(DragKey::Step(Step::Right)),
            _ => None,
        }
    }
}

/// Drop targets in board order: each container id with its item ids
pub type Layout<K> = [(K, Vec<K>)];

impl<K: Clone + PartialEq> DragSession<K> {
    pub fn press(id: K, x: i32, y: i32) -> Self {
        DragSession::Pending { id, origin: (x, y) }
    }

    /// Lift straight away, without a pointer
    pub fn lift(id: K) -> Self {
        DragSession::Active { id, over: None, pointer: None }
    }

    /// Pointer moved to (x, y). Keyboard drags ignore the pointer.
    pub fn moved(self, x: i32, y: i32, threshold_px: i32) -> Self {
        match self {
            DragSession::Pending { id, origin } => {
                let dx = (x - origin.0).abs();
                let dy = (y - origin.1).abs();
                if dx > threshold_px || dy > threshold_px {
                    DragSession::Active { id, over: None, pointer: Some((x, y)) }
                } else {
                    DragSession::Pending { id, origin }
                }
            }
            DragSession::Active { id, over, pointer: Some(_) } => {
                DragSession::Active { id, over, pointer: Some((x, y)) }
            }
            other => other,
        }
    }

    /// Set or clear the hovered target; ignored unless active.
    /// Hovering the lifted item itself is not a target.
    pub fn hover(&mut self, target: Option<K>) {
        if let DragSession::Active { id, over, .. } = self {
            *over = target.filter(|t| t != id);
        }
    }

    /// Pointer left `target`
    ///
    /// Only the current target, or an empty one (which is what hovering the
    /// lifted item leaves behind), hands over to `fallback`. Nested targets
    /// pass their container as `fallback`, since the container gets no fresh
    /// mouseenter when the pointer moves back into it.
    pub fn leave(&mut self, target: &K, fallback: Option<K>) {
        let is_current = match self {
            DragSession::Active { over, .. } => over.as_ref().map_or(true, |o| o == target),
            _ => false,
        };
        if is_current {
            self.hover(fallback);
        }
    }

    /// Move the target one step through `layout`
    ///
    /// Within a container the targets are its items (minus the lifted one)
    /// followed by the container itself, which means "the end". Up/Down walk
    /// that list; Left/Right jump to the same slot of the neighbouring
    /// container. With no target yet, the walk starts from the lifted item's
    /// own slot.
    pub fn step(&mut self, layout: &Layout<K>, dir: Step) {
        let DragSession::Active { id, over, .. } = self else { return };

        let targets = |col: usize| {
            let (col_id, items) = &layout[col];
            items
                .iter()
                .filter(|i| *i != &*id)
                .chain(std::iter::once(col_id))
                .collect::<Vec<&K>>()
        };

        // (container, slot, whether the slot is already a target)
        let here = match over.as_ref() {
            Some(current) => (0..layout.len()).find_map(|c| {
                targets(c).iter().position(|t| *t == current).map(|s| (c, s, true))
            }),
            None => layout.iter().enumerate().find_map(|(c, (_, items))| {
                items.iter().position(|i| i == &*id).map(|s| (c, s, false))
            }),
        };
        let Some((col, slot, on_target)) = here else { return };

        let (col, slot) = match dir {
            Step::Up if on_target => (col, slot.saturating_sub(1)),
            Step::Up => match slot.checked_sub(1) {
                Some(slot) => (col, slot),
                None => return,
            },
            Step::Down if on_target => (col, slot + 1),
            Step::Down => (col, slot),
            Step::Left => match col.checked_sub(1) {
                Some(col) => (col, slot),
                None => return,
            },
            Step::Right if col + 1 < layout.len() => (col + 1, slot),
            Step::Right => return,
        };

        let targets = targets(col);
        let next = targets[slot.min(targets.len() - 1)].clone();
        *over = Some(next);
    }

    /// Apply a handle key to the session of item `id`
    ///
    /// Returns the outcome when the key ends the session.
    pub fn key(self, id: &K, key: DragKey, layout: &Layout<K>) -> (Self, Option<DragOutcome<K>>) {
        match (self, key) {
            (DragSession::Idle, DragKey::Activate) => (DragSession::lift(id.clone()), None),
            (active @ DragSession::Active { .. }, DragKey::Activate) => (DragSession::Idle, Some(active.release())),
            (active @ DragSession::Active { .. }, DragKey::Cancel) => (DragSession::Idle, Some(active.cancel())),
            (mut active @ DragSession::Active { .. }, DragKey::Step(dir)) => {
                active.step(layout, dir);
                (active, None)
            }
            (other, _) => (other, None),
        }
    }

    /// Mouse released
    pub fn release(self) -> DragOutcome<K> {
        match self {
            DragSession::Idle => DragOutcome::Ignored,
            DragSession::Pending { id, .. } => DragOutcome::Clicked { id },
            DragSession::Active { id, over: Some(over), .. } => DragOutcome::Dropped { active: id, over },
            DragSession::Active { id, over: None, .. } => DragOutcome::Cancelled { active: id },
        }
    }

    /// Abort without applying anything
    pub fn cancel(self) -> DragOutcome<K> {
        match self {
            DragSession::Idle => DragOutcome::Ignored,
            DragSession::Pending { id, .. } => DragOutcome::Clicked { id },
            DragSession::Active { id, .. } => DragOutcome::Cancelled { active: id },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Active { .. })
    }

    /// Lifted from the keyboard; mouse release does not end it
    pub fn is_keyboard(&self) -> bool {
        matches!(self, DragSession::Active { pointer: None, .. })
    }

    pub fn active_id(&self) -> Option<&K> {
        match self {
            DragSession::Active { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn over_id(&self) -> Option<&K> {
        match self {
            DragSession::Active { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    pub fn pointer(&self) -> Option<(i32, i32)> {
        match self {
            DragSession::Active { pointer, .. } => *pointer,
            _ => None,
        }
    }
}
