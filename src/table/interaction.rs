//! Click versus text-selection disambiguation for table rows.

/// Release farther than this from the press point, on either axis, is a
/// selection drag rather than a click.
pub const DRAG_THRESHOLD_PX: f32 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RowPointer {
    #[default]
    Idle,
    Pressed {
        origin: Point,
    },
    ClickFired,
}

impl RowPointer {
    pub fn press(self, at: Point) -> Self {
        Self::Pressed { origin: at }
    }

    /// Releasing without a prior press never clicks.
    pub fn release(self, at: Point) -> Self {
        let Self::Pressed { origin } = self else {
            return Self::Idle;
        };

        let moved = (origin.x - at.x).abs() > DRAG_THRESHOLD_PX
            || (origin.y - at.y).abs() > DRAG_THRESHOLD_PX;
        if moved { Self::Idle } else { Self::ClickFired }
    }

    pub fn is_click(self) -> bool {
        self == Self::ClickFired
    }
}
