//! Real-valued rectangles and the small helpers the games are built from

use macroquad::math::{vec2, Vec2};
use rand::Rng;

/// Fraction of an entity's full size used as the half-extent of its hitbox.
///
/// Tuned by eye; sprites have transparent margins so a full-size box feels
/// too eager.
pub const HITBOX_FRACTION: f32 = 1.0 / 3.0;

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_parts(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Create from screen dimensions
    pub fn screen(size: Vec2) -> Self {
        Self::new(0.0, 0.0, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn origin(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        self.origin() + 0.5 * self.size()
    }

    /// Check if point is inside, edges included
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// A point is a rectangle of zero size
impl From<Vec2> for Rect {
    fn from(p: Vec2) -> Self {
        Self::from_parts(p, Vec2::ZERO)
    }
}

/// Amount to grow a rectangle by, either uniform or per axis
pub trait Extent {
    fn extent(self) -> Vec2;
}

impl Extent for f32 {
    fn extent(self) -> Vec2 {
        Vec2::splat(self)
    }
}

impl Extent for Vec2 {
    fn extent(self) -> Vec2 {
        self
    }
}

/// Grow `rect` by `delta` on every side, keeping its center.
/// Negative deltas shrink it.
pub fn expand(rect: impl Into<Rect>, delta: impl Extent) -> Rect {
    let rect = rect.into();
    let delta = delta.extent();
    Rect::from_parts(rect.origin() - delta, rect.size() + 2.0 * delta)
}

/// Clamp `p` inside `rect`
pub fn clamp(p: Vec2, rect: Rect) -> Vec2 {
    vec2(
        rect.left().max(p.x.min(rect.right())),
        rect.top().max(p.y.min(rect.bottom())),
    )
}

/// Uniformly sample a point inside `rect`, edges included
pub fn random_uniform<R: Rng + ?Sized>(rng: &mut R, rect: Rect) -> Vec2 {
    vec2(
        uniform(rng, rect.left(), rect.right()),
        uniform(rng, rect.top(), rect.bottom()),
    )
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    // An over-shrunk rect has its edges swapped
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Axis-aligned box overlap for boxes centered at `a` and `b`
pub fn overlap(a: Vec2, b: Vec2, a_half: Vec2, b_half: Vec2) -> bool {
    let d = (a - b).abs();
    d.x <= a_half.x + b_half.x && d.y <= a_half.y + b_half.y
}

/// True when `a` and `b` are strictly closer than `reach`
pub fn within(a: Vec2, b: Vec2, reach: f32) -> bool {
    a.distance(b) < reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn test_expand_keeps_center() {
        let rects = [
            Rect::new(0.0, 0.0, 1280.0, 720.0),
            Rect::new(-5.0, 3.0, 10.0, 2.0),
            Rect::new(7.5, -2.25, 0.0, 0.0),
        ];
        for r in rects {
            for d in [-3.0, 0.0, 0.5, 12.0] {
                let e = expand(r, d);
                assert!(approx(e.center(), r.center()));
                assert!((e.w - (r.w + 2.0 * d)).abs() < 1e-4);
                assert!((e.h - (r.h + 2.0 * d)).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_expand_per_axis() {
        let r = Rect::new(0.0, 0.0, 42.0, 24.0);
        let e = expand(r, vec2(-1.0, -2.0));
        assert_eq!(e, Rect::new(1.0, 2.0, 40.0, 20.0));
    }

    #[test]
    fn test_expand_point() {
        let e = expand(vec2(10.0, 20.0), vec2(3.0, 4.0));
        assert_eq!(e, Rect::new(7.0, 16.0, 6.0, 8.0));
        assert_eq!(e.center(), vec2(10.0, 20.0));
    }

    #[test]
    fn test_clamp() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        let inside = vec2(50.0, 40.0);
        assert_eq!(clamp(inside, r), inside);
        assert_eq!(clamp(vec2(-5.0, 40.0), r), vec2(10.0, 40.0));
        assert_eq!(clamp(vec2(500.0, 500.0), r), vec2(110.0, 70.0));
        for p in [vec2(-1e6, 1e6), vec2(0.0, 0.0), vec2(110.0, 70.0)] {
            assert!(r.contains(clamp(p, r)));
        }
    }

    #[test]
    fn test_random_uniform_in_bounds() {
        let r = Rect::new(-3.0, 5.0, 40.0, 0.5);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..64 {
                assert!(r.contains(random_uniform(&mut rng, r)));
            }
        }
    }

    #[test]
    fn test_random_uniform_reproducible() {
        let r = Rect::new(0.0, 0.0, 1280.0, 720.0);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let xs: Vec<Vec2> = (0..16).map(|_| random_uniform(&mut a, r)).collect();
        let ys: Vec<Vec2> = (0..16).map(|_| random_uniform(&mut b, r)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_random_uniform_degenerate() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = random_uniform(&mut rng, Rect::new(4.0, 4.0, 0.0, 0.0));
        assert_eq!(p, vec2(4.0, 4.0));
        // Shrunk past zero: edges swap, sampling still stays between them
        let r = expand(Rect::new(0.0, 0.0, 2.0, 2.0), -3.0);
        let p = random_uniform(&mut rng, r);
        assert!(p.x >= -2.0 && p.x <= 4.0);
    }

    #[test]
    fn test_overlap() {
        let half = vec2(10.0, 10.0);
        assert!(overlap(Vec2::ZERO, vec2(20.0, 0.0), half, half));
        assert!(overlap(Vec2::ZERO, vec2(20.0, 20.0), half, half));
        assert!(!overlap(Vec2::ZERO, vec2(20.5, 0.0), half, half));
        assert!(!overlap(Vec2::ZERO, vec2(0.0, -21.0), half, half));
    }

    #[test]
    fn test_within() {
        assert!(within(Vec2::ZERO, vec2(1.0, 0.0), 1.5));
        assert!(!within(Vec2::ZERO, vec2(1.5, 0.0), 1.5));
    }
}
