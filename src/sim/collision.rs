//! Pairwise overlap detection and elastic collision response
//!
//! Velocities are split into a component along the line of centers and a
//! tangential remainder. The normal components go through a 1D elastic
//! collision with radius² standing in for mass; tangential components are kept.
//! Positions are never corrected, so circles may stay interpenetrating until
//! their new velocities carry them apart.

use glam::Vec2;

use super::circle::Circle;
use crate::config::ImpulseModel;
use crate::{distance, perpendicular};

/// Overlap state of a pair of circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    /// Whether the discs touch or interpenetrate
    pub overlapping: bool,
    /// Sum of radii minus center distance (meaningful when overlapping)
    pub penetration: f32,
}

/// Evaluate overlap for a pair in one pass
#[inline]
pub fn pair_contact(a: &Circle, b: &Circle) -> PairContact {
    let reach = a.radius() + b.radius();
    let dist = distance(a.center, b.center);
    PairContact {
        overlapping: dist <= reach,
        penetration: reach - dist,
    }
}

/// Whether two circles touch or interpenetrate
#[inline]
pub fn is_overlapping(a: &Circle, b: &Circle) -> bool {
    pair_contact(a, b).overlapping
}

/// Sum of radii minus the distance between centers
#[inline]
pub fn penetration(a: &Circle, b: &Circle) -> f32 {
    pair_contact(a, b).penetration
}

/// Apply an elastic collision impulse to a pair
///
/// Returns `false` without touching either velocity when the centers
/// coincide, since no collision normal exists.
pub fn resolve_impulse(a: &mut Circle, b: &mut Circle, model: ImpulseModel) -> bool {
    let d = a.center - b.center;
    let dist = d.length();
    if dist <= f32::EPSILON {
        log::trace!("skipping impulse for coincident centers at {:?}", a.center);
        return false;
    }
    let (va, vb) = match model {
        ImpulseModel::Symmetric => symmetric_response(a, b, d / dist),
        ImpulseModel::Legacy => legacy_response(a, b),
    };
    a.velocity = va;
    b.velocity = vb;
    true
}

/// Textbook 1D elastic formula with m = r², signed tangential components
fn symmetric_response(a: &Circle, b: &Circle, e: Vec2) -> (Vec2, Vec2) {
    let t = perpendicular(e);
    let (ma, mb) = (a.radius() * a.radius(), b.radius() * b.radius());

    let (an, at) = (a.velocity.dot(e), a.velocity.dot(t));
    let (bn, bt) = (b.velocity.dot(e), b.velocity.dot(t));

    let total = ma + mb;
    let an_new = ((ma - mb) * an + 2.0 * mb * bn) / total;
    let bn_new = ((mb - ma) * bn + 2.0 * ma * an) / total;

    (e * an_new + t * at, e * bn_new + t * bt)
}

/// Reproduces the historical arithmetic operation for operation
///
/// The first term's denominator adds the other radius twice instead of its
/// square, and the tangential speed is an unsigned magnitude. Every quotient
/// divides by the raw center distance rather than going through a unit
/// normal, so results match bit for bit. The only departure is a negative
/// tangential radicand (round-off), which is clamped to zero instead of
/// producing NaN.
fn legacy_response(a: &Circle, b: &Circle) -> (Vec2, Vec2) {
    let dx = a.center.x - b.center.x;
    let dy = a.center.y - b.center.y;
    let dist = (dx * dx + dy * dy).sqrt();

    let ex = dx / dist;
    let ey = dy / dist;

    let (va, vb) = (a.velocity, b.velocity);
    let an = (va.x * dx + va.y * dy) / dist;
    let at = ((va.x * va.x + va.y * va.y) - an * an).max(0.0).sqrt();
    let bn = (vb.x * dx + vb.y * dy) / dist;
    let bt = ((vb.x * vb.x + vb.y * vb.y) - bn * bn).max(0.0).sqrt();

    let (ra, rb) = (a.radius(), b.radius());
    let an_new = (ra * ra - rb * rb) * an / (ra * ra + rb + rb)
        + 2.0 * rb * rb * bn / (ra * ra + rb * rb);
    let bn_new = (rb * rb - ra * ra) * bn / (rb * rb + ra + ra)
        + 2.0 * ra * ra * an / (rb * rb + ra * ra);

    (
        Vec2::new(an_new * ex + at * -ey, an_new * ey + at * ex),
        Vec2::new(bn_new * ex + bt * -ey, bn_new * ey + bt * ex),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn circle(x: f32, y: f32, r: f32, vx: f32, vy: f32) -> Circle {
        Circle::new(Vec2::new(x, y), r, Vec2::new(vx, vy), Vec4::ONE)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_overlap_detection() {
        let a = circle(0.0, 0.0, 0.1, 0.0, 0.0);
        let b = circle(0.15, 0.0, 0.1, 0.0, 0.0);
        let far = circle(0.5, 0.0, 0.1, 0.0, 0.0);

        assert!(is_overlapping(&a, &b));
        assert!((penetration(&a, &b) - 0.05).abs() < 1e-6);
        assert!(!is_overlapping(&a, &far));
        assert!(penetration(&a, &far) < 0.0);
    }

    #[test]
    fn test_touching_counts_as_overlap() {
        let a = circle(0.0, 0.0, 0.25, 0.0, 0.0);
        let b = circle(0.5, 0.0, 0.25, 0.0, 0.0);
        assert!(is_overlapping(&a, &b));
    }

    #[test]
    fn test_head_on_equal_radii_exchange() {
        for model in [ImpulseModel::Symmetric, ImpulseModel::Legacy] {
            let mut a = circle(-0.09, 0.0, 0.1, 1.0, 0.0);
            let mut b = circle(0.09, 0.0, 0.1, -1.0, 0.0);
            assert!(resolve_impulse(&mut a, &mut b, model));
            assert!(approx(a.velocity, Vec2::new(-1.0, 0.0)), "{model:?}: {:?}", a.velocity);
            assert!(approx(b.velocity, Vec2::new(1.0, 0.0)), "{model:?}: {:?}", b.velocity);
        }
    }

    #[test]
    fn test_symmetric_keeps_signed_tangent() {
        // Glancing contact along x, tangential motion along -y
        let mut a = circle(-0.09, 0.0, 0.1, 1.0, -0.5);
        let mut b = circle(0.09, 0.0, 0.1, -1.0, 0.0);
        resolve_impulse(&mut a, &mut b, ImpulseModel::Symmetric);
        assert!(approx(a.velocity, Vec2::new(-1.0, -0.5)));
        assert!(approx(b.velocity, Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_legacy_drops_tangent_sign() {
        let mut a = circle(-0.09, 0.0, 0.1, 1.0, -0.5);
        let mut b = circle(0.09, 0.0, 0.1, -1.0, 0.0);
        resolve_impulse(&mut a, &mut b, ImpulseModel::Legacy);
        // e = (-1, 0), perpendicular = (0, -1); magnitude 0.5 is laid along it
        assert!(approx(a.velocity, Vec2::new(-1.0, -0.5)));

        let mut a = circle(-0.09, 0.0, 0.1, 1.0, 0.5);
        let mut b = circle(0.09, 0.0, 0.1, -1.0, 0.0);
        resolve_impulse(&mut a, &mut b, ImpulseModel::Legacy);
        assert!(approx(a.velocity, Vec2::new(-1.0, -0.5)));
    }

    #[test]
    fn test_legacy_unequal_radii_hand_computed() {
        // |d| = 1.25 exactly, e = (0.6, 0.8)
        let mut a = circle(0.75, 1.0, 0.5, 1.0, 0.0);
        let mut b = circle(0.0, 0.0, 0.25, 0.0, -1.0);
        resolve_impulse(&mut a, &mut b, ImpulseModel::Legacy);

        // a: normal 0.6 -> -0.17, tangent 0.8
        // b: normal -0.8 -> 0.15 / 1.0625 + 0.96, tangent 0.6
        let bn = 0.15 / 1.0625 + 0.96;
        assert!(approx(a.velocity, Vec2::new(-0.742, 0.344)), "{:?}", a.velocity);
        assert!(
            approx(b.velocity, Vec2::new(bn * 0.6 - 0.48, bn * 0.8 + 0.36)),
            "{:?}",
            b.velocity
        );
    }

    /// Straight-line evaluation of the historical expressions in f32
    fn historical(c1: &Circle, c2: &Circle) -> [f32; 4] {
        let (x1, y1, r1) = (c1.center.x, c1.center.y, c1.radius());
        let (x2, y2, r2) = (c2.center.x, c2.center.y, c2.radius());
        let (v1, v2) = (c1.velocity, c2.velocity);
        let dx = x1 - x2;
        let dy = y1 - y2;
        let ex = (x1 - x2) / (dx * dx + dy * dy).sqrt();
        let ey = (y1 - y2) / (dx * dx + dy * dy).sqrt();
        let vi1 = (v1.x * dx + v1.y * dy) / (dx * dx + dy * dy).sqrt();
        let vt1 = ((v1.x * v1.x + v1.y * v1.y) - vi1 * vi1).sqrt();
        let vi2 = (v2.x * dx + v2.y * dy) / (dx * dx + dy * dy).sqrt();
        let vt2 = ((v2.x * v2.x + v2.y * v2.y) - vi2 * vi2).sqrt();
        let vf1 = (r1 * r1 - r2 * r2) * vi1 / (r1 * r1 + r2 + r2)
            + 2.0 * r2 * r2 * vi2 / (r1 * r1 + r2 * r2);
        let vf2 = (r2 * r2 - r1 * r1) * vi2 / (r2 * r2 + r1 + r1)
            + 2.0 * r1 * r1 * vi1 / (r2 * r2 + r1 * r1);
        [
            vf1 * ex + vt1 * -ey,
            vf1 * ey + vt1 * ex,
            vf2 * ex + vt2 * -ey,
            vf2 * ey + vt2 * ex,
        ]
    }

    #[test]
    fn test_legacy_matches_historical_bits() {
        use rand::{Rng, SeedableRng};
        use rand_pcg::Pcg32;

        let mut rng = Pcg32::seed_from_u64(2000);
        let mut compared = 0;
        for _ in 0..2000 {
            let mut a = circle(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(0.02..0.2),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            let mut b = circle(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(0.02..0.2),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            let expected = historical(&a, &b);
            // Round-off can push a tangential radicand below zero there
            if expected.iter().any(|v| v.is_nan()) {
                continue;
            }
            resolve_impulse(&mut a, &mut b, ImpulseModel::Legacy);
            let got = [a.velocity.x, a.velocity.y, b.velocity.x, b.velocity.y];
            for (g, e) in got.iter().zip(expected) {
                assert_eq!(g.to_bits(), e.to_bits(), "{got:?} vs {expected:?}");
            }
            compared += 1;
        }
        assert!(compared > 1900);
    }

    #[test]
    fn test_symmetric_conserves_momentum_and_energy() {
        let mut a = circle(-0.1, 0.02, 0.12, 0.8, 0.3);
        let mut b = circle(0.1, -0.01, 0.07, -0.6, 0.4);
        let mass = |c: &Circle| c.radius() * c.radius();

        let momentum_before = a.velocity * mass(&a) + b.velocity * mass(&b);
        let energy_before = a.kinetic_energy() + b.kinetic_energy();

        resolve_impulse(&mut a, &mut b, ImpulseModel::Symmetric);

        let momentum_after = a.velocity * mass(&a) + b.velocity * mass(&b);
        let energy_after = a.kinetic_energy() + b.kinetic_energy();

        assert!((momentum_before - momentum_after).length() < 1e-6);
        assert!((energy_before - energy_after).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_centers_skip() {
        let mut a = circle(0.0, 0.0, 0.1, 1.0, 0.0);
        let mut b = circle(0.0, 0.0, 0.1, -1.0, 0.0);
        assert!(!resolve_impulse(&mut a, &mut b, ImpulseModel::Symmetric));
        assert_eq!(a.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(-1.0, 0.0));
    }
}
