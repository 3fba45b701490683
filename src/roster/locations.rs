//! Static lookup tables behind the cascading country → state → city selects.
//!
//! The state options are taken only from the chosen country's entry and the
//! city options only from the chosen state's entry. Unknown keys have no
//! options.

const COUNTRIES: &[&str] = &["USA", "Canada", "India"];

const STATES: &[(&str, &[&str])] = &[
    ("USA", &["California", "New York", "Texas"]),
    ("Canada", &["Ontario", "Quebec", "British Columbia"]),
    ("India", &["Odisha", "Uttar Pradesh", "Mumbai"]),
];

const CITIES: &[(&str, &[&str])] = &[
    ("California", &["Los Angeles", "San Francisco", "San Diego"]),
    ("New York", &["New York City", "Buffalo", "Albany"]),
    ("Texas", &["Houston", "Austin", "Dallas"]),
    ("Ontario", &["Toronto", "Ottawa", "Hamilton"]),
    ("Quebec", &["Montreal", "Quebec City", "Laval"]),
    ("British Columbia", &["Vancouver", "Victoria", "Surrey"]),
    ("Odisha", &["Puri", "Bhubaneswar", "Cuttack"]),
    ("Uttar Pradesh", &["Ayodhya", "Prayagraj", "Varanasi"]),
    ("Mumbai", &["Navi Mumbai", "Pune", "Maharastra"]),
];

pub fn countries() -> &'static [&'static str] {
    COUNTRIES
}

pub fn states_for(country: &str) -> &'static [&'static str] {
    lookup(STATES, country)
}

pub fn cities_for(state: &str) -> &'static [&'static str] {
    lookup(CITIES, state)
}

pub fn is_state_of(country: &str, state: &str) -> bool {
    states_for(country).contains(&state)
}

pub fn is_city_of(state: &str, city: &str) -> bool {
    cities_for(state).contains(&city)
}

fn lookup(table: &'static [(&'static str, &'static [&'static str])], key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, values)| *values)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_country_has_states_and_every_state_has_cities() {
        for country in countries() {
            let states = states_for(country);
            assert_eq!(states.len(), 3, "{country}");
            for state in states {
                assert_eq!(cities_for(state).len(), 3, "{state}");
            }
        }
    }

    #[test]
    fn cascades_only_from_the_chosen_parent() {
        assert_eq!(states_for("Canada"), &["Ontario", "Quebec", "British Columbia"]);
        assert!(is_state_of("USA", "Texas"));
        assert!(!is_state_of("India", "Texas"));
        assert!(is_city_of("Mumbai", "Pune"));
        assert!(!is_city_of("Texas", "Pune"));
    }

    #[test]
    fn unknown_keys_have_no_options() {
        assert!(states_for("Atlantis").is_empty());
        assert!(cities_for("").is_empty());
    }
}
