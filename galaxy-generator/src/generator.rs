/// Procedural spiral galaxy point generation.
///
/// Each point is placed on one of `branches` evenly spaced arms, chosen by
/// index. Its distance from the origin is drawn uniformly, the arm is twisted
/// by `spin` radians per unit radius, and every axis receives a signed jitter
/// whose magnitude is a uniform draw raised to `randomness_power`.
use crate::config::{GenerationConfig, Gradient};
use crate::error::Result;
use crate::point_set::PointSet;
use rand::Rng;
use std::f32::consts::TAU;
use tracing::debug;

/// Generate a galaxy with the thread-local RNG.
pub fn generate(config: &GenerationConfig) -> Result<PointSet> {
    generate_with_rng(config, &mut rand::rng())
}

/// Generate a galaxy drawing from `rng`.
///
/// Draw order per point is fixed (radius, then magnitude and sign for x, y
/// and z) so a seeded RNG reproduces the same set.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<PointSet> {
    config.validate()?;

    let count = config.point_count();
    let branches = config.branches as usize;
    let gradient = config.gradient();

    let mut positions = Vec::with_capacity(count);
    let mut colours = gradient.map(|_| Vec::with_capacity(count));

    for index in 0..count {
        let radius = rng.random::<f32>() * config.radius;
        let offset = [
            jitter(rng, config.randomness, config.randomness_power),
            jitter(rng, config.randomness, config.randomness_power),
            jitter(rng, config.randomness, config.randomness_power),
        ];

        positions.push(place_point(index, branches, radius, offset, config.spin));

        if let (Some(colours), Some(gradient)) = (colours.as_mut(), gradient.as_ref()) {
            colours.push(colour_at(gradient, radius, config.radius));
        }
    }

    debug!(
        count,
        branches,
        coloured = gradient.is_some(),
        "generated galaxy point set"
    );

    Ok(PointSet::from_parts(positions, colours))
}

/// Arm a point belongs to. Assigned by index so arm sizes differ by at most one.
pub fn branch_index(index: usize, branches: usize) -> usize {
    index % branches
}

/// Base angle of the arm a point belongs to, in radians.
pub fn branch_angle(index: usize, branches: usize) -> f32 {
    branch_index(index, branches) as f32 / branches as f32 * TAU
}

/// Place a point given its radius draw and per-axis offsets.
///
/// The vertical coordinate is pure jitter, giving a flat disk.
pub fn place_point(
    index: usize,
    branches: usize,
    radius: f32,
    offset: [f32; 3],
    spin: f32,
) -> [f32; 3] {
    let angle = branch_angle(index, branches) + radius * spin;
    [
        angle.sin() * radius + offset[0],
        offset[1],
        angle.cos() * radius + offset[2],
    ]
}

/// Gradient colour for a point drawn at `radius` out of `max_radius`.
pub fn colour_at(gradient: &Gradient, radius: f32, max_radius: f32) -> [f32; 3] {
    let t = if max_radius > 0.0 {
        (radius / max_radius).clamp(0.0, 1.0)
    } else {
        0.0
    };
    gradient.sample(t).to_array()
}

/// Signed offset in `[-randomness, randomness]`, biased towards zero by `power`.
fn jitter<R: Rng + ?Sized>(rng: &mut R, randomness: f32, power: f32) -> f32 {
    let magnitude = rng.random::<f32>().powf(power);
    let sign = if rng.random::<f32>() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * randomness
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::error::GalaxyError;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::f32::consts::SQRT_2;

    /// RNG returning the same word forever.
    struct ConstRng(u32);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            ((self.0 as u64) << 32) | self.0 as u64
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn inside() -> Colour {
        Colour::from_hex("#ff6030").unwrap()
    }

    fn outside() -> Colour {
        Colour::from_hex("#1b3984").unwrap()
    }

    fn config(count: i64, branches: i64) -> GenerationConfig {
        GenerationConfig {
            count,
            branches,
            radius: 5.0,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_colour: Some(inside()),
            outside_colour: Some(outside()),
            ..Default::default()
        }
    }

    #[test]
    fn zero_count_yields_empty_set() {
        let set = generate(&config(0, 3)).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.colours().map(<[_]>::len), Some(0));
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let err = generate(&config(-1, 3)).unwrap_err();
        assert!(matches!(err, GalaxyError::InvalidConfig { field: "count", .. }));

        let err = generate(&config(10, 0)).unwrap_err();
        assert!(matches!(
            err,
            GalaxyError::InvalidConfig {
                field: "branches",
                ..
            }
        ));

        let mut negative_radius = config(10, 3);
        negative_radius.radius = -1.0;
        assert!(generate(&negative_radius).unwrap_err().is_invalid_config());
    }

    #[test]
    fn three_branches_split_three_hundred_points_evenly() {
        let mut per_branch = [0usize; 3];
        for index in 0..300 {
            per_branch[branch_index(index, 3)] += 1;
        }
        assert_eq!(per_branch, [100, 100, 100]);
    }

    #[test]
    fn generated_points_sit_on_their_branch_without_spin_or_jitter() {
        let mut cfg = config(300, 3);
        cfg.spin = 0.0;
        cfg.randomness = 0.0;
        let set = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(7)).unwrap();

        let arm_width = TAU / 3.0;
        let mut per_branch = [0usize; 3];
        for (index, [x, _, z]) in set.positions().iter().enumerate() {
            let angle = x.atan2(*z).rem_euclid(TAU);
            let arm = ((angle / arm_width).round() as usize) % 3;
            assert_eq!(arm, branch_index(index, 3), "point {index} on wrong arm");
            per_branch[arm] += 1;
        }
        assert_eq!(per_branch, [100, 100, 100]);
    }

    #[test]
    fn place_point_follows_the_spiral() {
        let position = place_point(4, 3, 2.5, [0.0; 3], 1.5);
        let angle = branch_angle(4, 3) + 2.5 * 1.5;
        assert_eq!(position, [angle.sin() * 2.5, 0.0, angle.cos() * 2.5]);
    }

    #[test]
    fn zero_radius_draw_takes_inside_colour() {
        let set = generate_with_rng(&config(16, 3), &mut ConstRng(0)).unwrap();
        for position in set.positions() {
            assert_eq!(*position, [0.0, 0.0, 0.0]);
        }
        for colour in set.colours().unwrap() {
            assert_eq!(*colour, inside().to_array());
        }
    }

    #[test]
    fn full_radius_takes_outside_colour() {
        let cfg = config(1, 3);
        let gradient = cfg.gradient().unwrap();
        assert_eq!(colour_at(&gradient, cfg.radius, cfg.radius), outside().to_array());
        assert_eq!(colour_at(&gradient, 0.0, cfg.radius), inside().to_array());
    }

    #[test]
    fn zero_max_radius_uses_inside_colour() {
        let gradient = config(1, 3).gradient().unwrap();
        assert_eq!(colour_at(&gradient, 0.0, 0.0), inside().to_array());
    }

    #[test]
    fn colour_grows_towards_outside_with_radius() {
        let mut cfg = config(500, 4);
        cfg.randomness = 0.0;
        cfg.spin = 0.0;
        let set = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(11)).unwrap();
        let gradient = cfg.gradient().unwrap();

        for (position, colour) in set.positions().iter().zip(set.colours().unwrap()) {
            let radius = position[0].hypot(position[2]);
            let expected = colour_at(&gradient, radius, cfg.radius);
            for channel in 0..3 {
                assert_abs_diff_eq!(colour[channel], expected[channel], epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn zero_radius_leaves_only_jitter() {
        let mut cfg = config(400, 5);
        cfg.radius = 0.0;
        cfg.randomness = 0.75;
        let set = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(3)).unwrap();
        for position in set.positions() {
            for axis in position {
                assert!(axis.abs() <= 0.75);
            }
        }
    }

    #[test]
    fn single_branch_is_not_an_error() {
        let set = generate(&config(50, 1)).unwrap();
        assert_eq!(set.len(), 50);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let cfg = config(256, 3);
        let a = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(42)).unwrap();
        let c = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn uncoloured_config_produces_no_colours() {
        let set = generate(&config(10, 3).without_colours()).unwrap();
        assert_eq!(set.len(), 10);
        assert!(!set.has_colours());
    }

    fn valid_config() -> impl Strategy<Value = GenerationConfig> {
        (
            0i64..600,
            1i64..12,
            0.0f32..20.0,
            -5.0f32..5.0,
            0.0f32..2.0,
            1.0f32..10.0,
        )
            .prop_map(
                |(count, branches, radius, spin, randomness, randomness_power)| GenerationConfig {
                    count,
                    branches,
                    radius,
                    spin,
                    randomness,
                    randomness_power,
                    ..Default::default()
                },
            )
    }

    proptest! {
        #[test]
        fn prop_lengths_match_count(cfg in valid_config(), seed in any::<u64>()) {
            let set = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(seed)).unwrap();
            prop_assert_eq!(set.len(), cfg.count as usize);
            prop_assert_eq!(set.colours().map(<[_]>::len), Some(cfg.count as usize));

            let plain = generate_with_rng(&cfg.clone().without_colours(), &mut StdRng::seed_from_u64(seed)).unwrap();
            prop_assert_eq!(plain.len(), cfg.count as usize);
            prop_assert!(plain.colours().is_none());
        }

        #[test]
        fn prop_points_stay_within_radius_plus_jitter(cfg in valid_config(), seed in any::<u64>()) {
            let set = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(seed)).unwrap();
            let limit = cfg.radius + cfg.randomness * SQRT_2 + 1e-4;
            for [x, y, z] in set.positions() {
                prop_assert!(x.hypot(*z) <= limit);
                prop_assert!(y.abs() <= cfg.randomness + 1e-6);
            }
        }

        #[test]
        fn prop_no_randomness_means_exact_spiral(cfg in valid_config(), seed in any::<u64>()) {
            let cfg = GenerationConfig { randomness: 0.0, ..cfg };
            let set = generate_with_rng(&cfg, &mut StdRng::seed_from_u64(seed)).unwrap();
            let branches = cfg.branches as usize;
            for (index, [x, y, z]) in set.positions().iter().enumerate() {
                prop_assert_eq!(y.abs(), 0.0);
                let radius = x.hypot(*z);
                let angle = branch_angle(index, branches) + radius * cfg.spin;
                prop_assert!((x - angle.sin() * radius).abs() <= 1e-3);
                prop_assert!((z - angle.cos() * radius).abs() <= 1e-3);
            }
        }
    }
}
