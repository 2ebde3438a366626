/// Integer pixel position; `x` grows rightwards and `y` grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
