//! Distant-sky ambience: horizon objects, moons, and stars. The only part
//! of a finished level that animates.

use std::f64::consts::TAU;

use relic_random::LegacyRandom;

use crate::weather::{Climate, Weather};

/// A static object on the horizon.
#[derive(Clone, Copy, Debug)]
pub struct LandObject {
    pub entry_index: i32,
    pub angle: f64,
}

/// A horizon object with a looping animation (volcanoes and the like).
#[derive(Clone, Copy, Debug)]
pub struct AnimatedLandObject {
    pub entry_index: i32,
    pub angle: f64,
    target_seconds: f64,
    current_seconds: f64,
}

impl AnimatedLandObject {
    const DEFAULT_ANIM_SECONDS: f64 = 1.0 / 3.0;

    fn new(entry_index: i32, angle: f64) -> Self {
        Self {
            entry_index,
            angle,
            target_seconds: Self::DEFAULT_ANIM_SECONDS,
            current_seconds: 0.0,
        }
    }

    #[inline]
    pub fn anim_percent(&self) -> f64 {
        self.current_seconds / self.target_seconds
    }

    pub fn update(&mut self, dt: f64) {
        self.current_seconds += dt;
        while self.current_seconds >= self.target_seconds {
            self.current_seconds -= self.target_seconds;
        }
    }
}

/// An object in the air, like a cloud; height 0 is the horizon, 1 the top
/// of the sky gradient.
#[derive(Clone, Copy, Debug)]
pub struct AirObject {
    pub entry_index: i32,
    pub angle: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoonKind {
    First,
    Second,
}

/// A moon; its phase is fixed by the day the level was generated on.
#[derive(Clone, Copy, Debug)]
pub struct MoonObject {
    pub kind: MoonKind,
    pub phase_percent: f64,
}

/// A point star, as a unit-ish direction in the night sky.
#[derive(Clone, Copy, Debug)]
pub struct StarObject {
    pub direction: [f64; 3],
}

/// Ambient distant scenery for one exterior level. Built once with the
/// level; `tick` advances only the animated-land timers.
#[derive(Clone, Debug, Default)]
pub struct DistantSky {
    land: Vec<LandObject>,
    animated_land: Vec<AnimatedLandObject>,
    air: Vec<AirObject>,
    moons: Vec<MoonObject>,
    stars: Vec<StarObject>,
}

const LAND_COUNT: usize = 8;
const AIR_COUNT: usize = 3;
const FIRST_MOON_PERIOD: i32 = 32;
const SECOND_MOON_PERIOD: i32 = 24;

fn draw_angle(random: &mut LegacyRandom) -> f64 {
    f64::from(random.next()) / 65536.0 * TAU
}

impl DistantSky {
    pub fn new(
        seed: u32,
        climate: Climate,
        weather: Weather,
        current_day: i32,
        star_count: i32,
    ) -> Self {
        let mut random = LegacyRandom::new(seed);

        let land = (0..LAND_COUNT)
            .map(|_| {
                let entry_index = (random.next() % 4) as i32;
                LandObject {
                    entry_index,
                    angle: draw_angle(&mut random),
                }
            })
            .collect();

        // Mountain horizons carry one animated object.
        let animated_land = if climate == Climate::Mountain {
            let angle = draw_angle(&mut random);
            vec![AnimatedLandObject::new(0, angle)]
        } else {
            Vec::new()
        };

        let air = if weather.is_overcast() {
            (0..AIR_COUNT)
                .map(|i| AirObject {
                    entry_index: i as i32,
                    angle: draw_angle(&mut random),
                    height: f64::from(random.next()) / 65536.0,
                })
                .collect()
        } else {
            Vec::new()
        };

        let moons = vec![
            MoonObject {
                kind: MoonKind::First,
                phase_percent: f64::from(current_day.rem_euclid(FIRST_MOON_PERIOD))
                    / f64::from(FIRST_MOON_PERIOD),
            },
            MoonObject {
                kind: MoonKind::Second,
                phase_percent: f64::from(current_day.rem_euclid(SECOND_MOON_PERIOD))
                    / f64::from(SECOND_MOON_PERIOD),
            },
        ];

        let stars = (0..star_count.max(0))
            .map(|_| {
                let component = |r: &mut LegacyRandom| f64::from(r.next()) / 32768.0 - 1.0;
                let mut dir = [
                    component(&mut random),
                    component(&mut random),
                    component(&mut random),
                ];
                let len = (dir[0] * dir[0] + dir[1] * dir[1] + dir[2] * dir[2]).sqrt();
                if len > 0.0 {
                    for c in &mut dir {
                        *c /= len;
                    }
                } else {
                    dir = [0.0, 0.0, 1.0];
                }
                StarObject { direction: dir }
            })
            .collect();

        Self {
            land,
            animated_land,
            air,
            moons,
            stars,
        }
    }

    #[inline]
    pub fn land(&self) -> &[LandObject] {
        &self.land
    }

    #[inline]
    pub fn animated_land(&self) -> &[AnimatedLandObject] {
        &self.animated_land
    }

    #[inline]
    pub fn air(&self) -> &[AirObject] {
        &self.air
    }

    #[inline]
    pub fn moons(&self) -> &[MoonObject] {
        &self.moons
    }

    #[inline]
    pub fn stars(&self) -> &[StarObject] {
        &self.stars
    }

    /// Only animated distant land needs updating.
    pub fn tick(&mut self, dt: f64) {
        for anim in &mut self.animated_land {
            anim.update(dt);
        }
    }
}
