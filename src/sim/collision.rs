//! Axis-aligned collision primitives
//!
//! Everything on the field collides as a box: agents are squares and balls use
//! their circumscribing square. Overlap is strict, so boxes that merely share
//! an edge do not collide.

use glam::Vec2;

use super::state::Ball;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Whether this box lies fully inside `other`
    pub fn contained_in(&self, other: &Aabb) -> bool {
        self.min.x >= other.min.x
            && self.min.y >= other.min.y
            && self.max.x <= other.max.x
            && self.max.y <= other.max.y
    }
}

/// Remove every ball whose box intersects `agent` and return how many were
/// removed.
///
/// Removal is permanent: a later pass in the same tick sees the reduced set,
/// which is what makes the player-then-pursuer resolution order meaningful.
pub fn collect_hits(agent: &Aabb, balls: &mut Vec<Ball>) -> u32 {
    let before = balls.len();
    balls.retain(|ball| !agent.intersects(&ball.aabb()));
    (before - balls.len()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(cx: f32, cy: f32, side: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(cx, cy), Vec2::splat(side))
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = aabb(100.0, 100.0, 30.0);
        let b = aabb(110.0, 110.0, 20.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_separated_boxes_miss() {
        let a = aabb(100.0, 100.0, 30.0);
        let b = aabb(200.0, 100.0, 20.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_edge_contact_is_not_a_hit() {
        // Right edge of `a` at x=115 exactly touches left edge of `b`
        let a = aabb(100.0, 100.0, 30.0);
        let b = aabb(125.0, 100.0, 20.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_containment() {
        let field = Aabb {
            min: Vec2::ZERO,
            max: Vec2::new(800.0, 600.0),
        };
        assert!(aabb(15.0, 15.0, 30.0).contained_in(&field));
        assert!(!aabb(5.0, 15.0, 30.0).contained_in(&field));
    }

    #[test]
    fn test_collect_hits_removes_and_counts() {
        let agent = aabb(100.0, 100.0, 30.0);
        let mut balls = vec![
            Ball::new(Vec2::new(105.0, 100.0), Vec2::new(1.0, 0.0), 10.0),
            Ball::new(Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0), 10.0),
            Ball::new(Vec2::new(95.0, 110.0), Vec2::new(-2.0, 3.0), 10.0),
        ];

        let hits = collect_hits(&agent, &mut balls);
        assert_eq!(hits, 2);
        assert_eq!(balls.len(), 1);
        assert_eq!(balls[0].pos, Vec2::new(400.0, 300.0));

        // A second pass over the survivors finds nothing new
        assert_eq!(collect_hits(&agent, &mut balls), 0);
        assert_eq!(balls.len(), 1);
    }

    #[test]
    fn test_collect_hits_tolerates_empty_set() {
        let agent = aabb(100.0, 100.0, 30.0);
        let mut balls = Vec::new();
        assert_eq!(collect_hits(&agent, &mut balls), 0);
    }
}
