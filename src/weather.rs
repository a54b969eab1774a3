//! Climate and weather, and the texture-set name each combination selects.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Climate {
    Temperate,
    Desert,
    Mountain,
}

impl Climate {
    fn letter(self) -> char {
        match self {
            Climate::Temperate => 'T',
            Climate::Desert => 'D',
            Climate::Mountain => 'M',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weather {
    Clear,
    Overcast,
    Rain,
    Snow,
}

impl Weather {
    #[inline]
    pub fn is_snow(self) -> bool {
        matches!(self, Weather::Snow)
    }

    #[inline]
    pub fn is_overcast(self) -> bool {
        matches!(self, Weather::Overcast)
    }
}

fn weather_letter(climate: Climate, weather: Weather) -> char {
    match weather {
        Weather::Clear | Weather::Overcast => 'N',
        Weather::Rain => 'R',
        Weather::Snow => {
            if climate == Climate::Desert {
                // Deserts have no snow templates.
                log::warn!("no desert snow template; falling back to clear");
                'N'
            } else {
                'S'
            }
        }
    }
}

/// Texture-set name for a city level.
pub fn city_inf_name(climate: Climate, weather: Weather) -> String {
    format!("{}C{}.INF", climate.letter(), weather_letter(climate, weather))
}

/// Texture-set name for a wilderness level.
pub fn wild_inf_name(climate: Climate, weather: Weather) -> String {
    format!("{}W{}.INF", climate.letter(), weather_letter(climate, weather))
}
