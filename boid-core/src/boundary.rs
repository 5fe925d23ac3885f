use crate::boid::Boid;

/// Keeps boids inside the world after motion.
pub trait BoundaryPolicy {
    fn apply(&self, boid: &mut Boid);
}

/// Rectangular world `[0, width] x [0, height]` with elastic walls.
///
/// On each axis a boid past a wall is placed on the wall and the velocity
/// component along that axis is negated. A boid exactly on a wall is left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectingBounds {
    pub width: f32,
    pub height: f32,
}

impl ReflectingBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, boid: &Boid) -> bool {
        (0.0..=self.width).contains(&boid.position.x)
            && (0.0..=self.height).contains(&boid.position.y)
    }
}

#[inline]
fn reflect_axis(position: &mut f32, velocity: &mut f32, bound: f32) {
    if *position < 0.0 {
        *position = 0.0;
        *velocity = -*velocity;
    } else if *position > bound {
        *position = bound;
        *velocity = -*velocity;
    }
}

impl BoundaryPolicy for ReflectingBounds {
    fn apply(&self, boid: &mut Boid) {
        reflect_axis(&mut boid.position.x, &mut boid.velocity.x, self.width);
        reflect_axis(&mut boid.position.y, &mut boid.velocity.y, self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector2D;

    #[test]
    fn test_reflects_left_wall() {
        let bounds = ReflectingBounds::new(100.0, 100.0);
        let mut boid = Boid::new(Vector2D::new(-1.0, 50.0), Vector2D::new(-2.0, 0.0));

        bounds.apply(&mut boid);

        assert_eq!(boid.position, Vector2D::new(0.0, 50.0));
        assert_eq!(boid.velocity, Vector2D::new(2.0, 0.0));
    }

    #[test]
    fn test_reflects_far_corner_on_both_axes() {
        let bounds = ReflectingBounds::new(800.0, 600.0);
        let mut boid = Boid::new(Vector2D::new(801.5, 600.5), Vector2D::new(1.5, 1.0));

        bounds.apply(&mut boid);

        assert_eq!(boid.position, Vector2D::new(800.0, 600.0));
        assert_eq!(boid.velocity, Vector2D::new(-1.5, -1.0));
    }

    #[test]
    fn test_only_clamped_axis_is_reflected() {
        let bounds = ReflectingBounds::new(100.0, 100.0);
        let mut boid = Boid::new(Vector2D::new(50.0, -3.0), Vector2D::new(1.0, -1.0));

        bounds.apply(&mut boid);

        assert_eq!(boid.position, Vector2D::new(50.0, 0.0));
        assert_eq!(boid.velocity, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn test_boid_on_wall_is_untouched() {
        let bounds = ReflectingBounds::new(100.0, 100.0);
        let original = Boid::new(Vector2D::new(0.0, 100.0), Vector2D::new(-1.0, 1.0));
        let mut boid = original;

        bounds.apply(&mut boid);

        assert_eq!(boid, original);
        assert!(bounds.contains(&boid));
    }
}
