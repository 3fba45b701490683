//! Current-weather lookup for a town.
//!
//! An external collaborator: the rest of the library only sees the
//! [`WeatherLookup`] trait. [`OpenWeatherClient`] implements it against the
//! OpenWeather HTTP API in two steps (geocoding, then current conditions).
//!
//! Callers in the form flow use [`fetch_quietly`], which skips short town
//! names and turns every failure into a logged `None`.

use crate::error::{Result, RosterError};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Town names this short are not looked up.
pub const MIN_TOWN_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub name: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub description: String,
    /// Metres per second.
    pub wind_speed: f64,
}

pub trait WeatherLookup {
    /// `Ok(None)` when the town could not be geocoded.
    fn lookup(&self, town: &str) -> Result<Option<WeatherReport>>;
}

#[derive(Debug, Deserialize)]
struct GeoHit {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    name: String,
    main: MainReadings,
    weather: Vec<Condition>,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

impl From<CurrentConditions> for WeatherReport {
    fn from(c: CurrentConditions) -> Self {
        Self {
            name: c.name,
            temperature: c.main.temp,
            description: c
                .weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .unwrap_or_default(),
            wind_speed: c.wind.speed,
        }
    }
}

fn first_hit(body: &str) -> Result<Option<(f64, f64)>> {
    let hits: Vec<GeoHit> = serde_json::from_str(body)?;
    Ok(hits.into_iter().next().map(|h| (h.lat, h.lon)))
}

fn parse_conditions(body: &str) -> Result<WeatherReport> {
    let conditions: CurrentConditions = serde_json::from_str(body)?;
    Ok(conditions.into())
}

pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn geocode_url(&self, town: &str) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/geo/1.0/direct", self.base_url),
            &[("q", town), ("limit", "1"), ("appid", self.api_key.as_str())],
        )
        .map_err(|e| RosterError::Weather(e.to_string()))
    }

    fn conditions_url(&self, lat: f64, lon: f64) -> Result<Url> {
        let (lat, lon) = (lat.to_string(), lon.to_string());
        Url::parse_with_params(
            &format!("{}/data/2.5/weather", self.base_url),
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ],
        )
        .map_err(|e| RosterError::Weather(e.to_string()))
    }

    fn get_text(&self, url: Url) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, format!("roster/{}", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()?;

        if !response.status().is_success() {
            return Err(RosterError::Weather(format!(
                "weather service answered {}",
                response.status()
            )));
        }
        Ok(response.text()?)
    }
}

impl WeatherLookup for OpenWeatherClient {
    fn lookup(&self, town: &str) -> Result<Option<WeatherReport>> {
        debug!(town, "geocoding town");
        let Some((lat, lon)) = first_hit(&self.get_text(self.geocode_url(town)?)?)? else {
            debug!(town, "no geocoding match");
            return Ok(None);
        };

        debug!(town, lat, lon, "fetching current conditions");
        let report = parse_conditions(&self.get_text(self.conditions_url(lat, lon)?)?)?;
        Ok(Some(report))
    }
}

/// Looks up the weather for `town`, never failing.
///
/// Names shorter than [`MIN_TOWN_LEN`] are skipped. Errors are logged and
/// reported as `None`.
pub fn fetch_quietly(lookup: &dyn WeatherLookup, town: &str) -> Option<WeatherReport> {
    let town = town.trim();
    if town.chars().count() < MIN_TOWN_LEN {
        return None;
    }
    match lookup.lookup(town) {
        Ok(report) => report,
        Err(e) => {
            warn!(town, error = %e, "weather lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const CONDITIONS: &str = r#"{
        "coord": {"lon": -122.14, "lat": 37.44},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 18.5, "feels_like": 17.9, "humidity": 60},
        "wind": {"speed": 3.6, "deg": 290},
        "name": "Palo Alto"
    }"#;

    struct Canned {
        answer: Result<Option<WeatherReport>>,
        calls: Cell<usize>,
    }

    impl Canned {
        fn new(answer: Result<Option<WeatherReport>>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl WeatherLookup for Canned {
        fn lookup(&self, _town: &str) -> Result<Option<WeatherReport>> {
            self.calls.set(self.calls.get() + 1);
            match &self.answer {
                Ok(report) => Ok(report.clone()),
                Err(_) => Err(RosterError::Weather("offline".into())),
            }
        }
    }

    #[test]
    fn parses_the_consumed_fields() {
        let report = parse_conditions(CONDITIONS).unwrap();
        assert_eq!(
            report,
            WeatherReport {
                name: "Palo Alto".into(),
                temperature: 18.5,
                description: "clear sky".into(),
                wind_speed: 3.6,
            }
        );
    }

    #[test]
    fn empty_geocoding_answer_means_no_match() {
        assert_eq!(first_hit("[]").unwrap(), None);
        assert_eq!(
            first_hit(r#"[{"name": "Pune", "lat": 18.52, "lon": 73.85}]"#).unwrap(),
            Some((18.52, 73.85))
        );
    }

    #[test]
    fn malformed_payloads_are_errors() {
        assert!(parse_conditions("{}").is_err());
        assert!(first_hit("nope").is_err());
    }

    #[test]
    fn urls_carry_the_expected_parameters() {
        let client =
            OpenWeatherClient::new("KEY", "https://example.test/", Duration::from_secs(1)).unwrap();
        let geo = client.geocode_url("Palo Alto").unwrap();
        assert_eq!(geo.path(), "/geo/1.0/direct");
        assert!(geo.as_str().contains("q=Palo+Alto"));
        assert!(geo.as_str().contains("limit=1"));
        assert!(geo.as_str().contains("appid=KEY"));

        let now = client.conditions_url(1.5, -2.25).unwrap();
        assert_eq!(now.path(), "/data/2.5/weather");
        assert!(now.as_str().contains("lat=1.5"));
        assert!(now.as_str().contains("lon=-2.25"));
        assert!(now.as_str().contains("units=metric"));
    }

    #[test]
    fn short_towns_are_not_looked_up() {
        let lookup = Canned::new(Ok(None));
        assert_eq!(fetch_quietly(&lookup, "LA"), None);
        assert_eq!(lookup.calls.get(), 0);
    }

    #[test]
    fn failures_are_swallowed() {
        let lookup = Canned::new(Err(RosterError::Weather("offline".into())));
        assert_eq!(fetch_quietly(&lookup, "Palo Alto"), None);
        assert_eq!(lookup.calls.get(), 1);
    }

    #[test]
    fn successes_pass_through() {
        let report = parse_conditions(CONDITIONS).unwrap();
        let lookup = Canned::new(Ok(Some(report.clone())));
        assert_eq!(fetch_quietly(&lookup, "Palo Alto"), Some(report));
    }
}
