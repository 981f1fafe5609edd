/// A pixel position. Signed so that off-screen input can be represented and rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
