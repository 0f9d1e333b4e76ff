//! Interpolation helpers behind the decorative effects
//!
//! Cursor trails, parallax layers and counters all reduce to a handful of
//! formulas. They live here, free of any DOM types.

/// 2D point or offset in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// `translate3d` value for a `transform` style
    pub fn to_translate(self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn lerp_vec(from: Vec2, to: Vec2, t: f64) -> Vec2 {
    Vec2::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t))
}

/// Frame-rate independent smoothing factor.
///
/// `per_frame` is the fraction covered in one 60 fps frame; the result covers
/// the same ground for an arbitrary `dt_ms`.
pub fn smoothing(per_frame: f64, dt_ms: f64) -> f64 {
    let per_frame = per_frame.clamp(0.0, 1.0);
    let frames = (dt_ms / (1000.0 / 60.0)).max(0.0);
    1.0 - (1.0 - per_frame).powf(frames)
}

/// Damped spring chasing a moving target, used for the cursor ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: Vec2,
    pub velocity: Vec2,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            stiffness: 170.0,
            damping: 26.0,
        }
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            ..Default::default()
        }
    }

    /// Put the spring at rest on `position`
    pub fn snap(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
    }

    /// Advance by `dt_ms` toward `target` (semi-implicit Euler, 4 ms substeps)
    pub fn step(&mut self, target: Vec2, dt_ms: f64) -> Vec2 {
        // Long frames (background tab) would make the integration explode
        let mut remaining = dt_ms.clamp(0.0, 64.0) / 1000.0;
        const SUBSTEP: f64 = 0.004;

        while remaining > 0.0 {
            let dt = remaining.min(SUBSTEP);
            let ax = -self.stiffness * (self.position.x - target.x) - self.damping * self.velocity.x;
            let ay = -self.stiffness * (self.position.y - target.y) - self.damping * self.velocity.y;
            self.velocity.x += ax * dt;
            self.velocity.y += ay * dt;
            self.position.x += self.velocity.x * dt;
            self.position.y += self.velocity.y * dt;
            remaining -= dt;
        }

        self.position
    }

    pub fn is_settled(&self, target: Vec2) -> bool {
        self.position.distance(target) < 0.1 && self.velocity.distance(Vec2::ZERO) < 0.1
    }
}

/// Vertical parallax offset for a layer: positive factors lag the scroll
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    -scroll_y * factor
}

/// Value shown by a count-up statistic `elapsed_ms` into its animation
pub fn count_up(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 {
        return target;
    }
    let t = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (crate::core::loader::ease_out_cubic(t) * f64::from(target)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(-10.0, 10.0, 0.5), 0.0);
        assert_eq!(
            lerp_vec(Vec2::ZERO, Vec2::new(4.0, 8.0), 0.25),
            Vec2::new(1.0, 2.0)
        );
    }

    #[test]
    fn test_smoothing_matches_single_frame() {
        let one_frame = smoothing(0.2, 1000.0 / 60.0);
        assert!((one_frame - 0.2).abs() < 1e-9);

        let two_frames = smoothing(0.2, 2000.0 / 60.0);
        assert!((two_frames - 0.36).abs() < 1e-9);

        assert_eq!(smoothing(0.2, 0.0), 0.0);
    }

    #[test]
    fn test_spring_converges_to_target() {
        let mut spring = Spring::default();
        let target = Vec2::new(300.0, 120.0);

        for _ in 0..240 {
            spring.step(target, 16.0);
        }

        assert!(spring.is_settled(target), "spring at {:?}", spring.position);
    }

    #[test]
    fn test_spring_survives_huge_frames() {
        let mut spring = Spring::default();
        let position = spring.step(Vec2::new(100.0, 100.0), 10_000.0);

        assert!(position.x.is_finite() && position.y.is_finite());
        assert!(position.x.abs() < 1000.0);
    }

    #[test]
    fn test_spring_snap() {
        let mut spring = Spring::new(200.0, 20.0);
        spring.step(Vec2::new(50.0, 50.0), 16.0);
        spring.snap(Vec2::new(5.0, 6.0));

        assert_eq!(spring.position, Vec2::new(5.0, 6.0));
        assert_eq!(spring.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(0.0, 0.3), 0.0);
        assert_eq!(parallax_offset(100.0, 0.3), -30.0);
        assert_eq!(parallax_offset(100.0, -0.5), 50.0);
    }

    #[test]
    fn test_count_up() {
        assert_eq!(count_up(120, 0.0, 2000.0), 0);
        assert_eq!(count_up(120, 2000.0, 2000.0), 120);
        assert_eq!(count_up(120, 9000.0, 2000.0), 120);
        assert_eq!(count_up(120, 10.0, 0.0), 120);
        assert!(count_up(120, 1000.0, 2000.0) > 60);
    }

    #[test]
    fn test_translate_format() {
        assert_eq!(
            Vec2::new(1.0, -2.5).to_translate(),
            "translate3d(1.00px, -2.50px, 0)"
        );
    }
}
