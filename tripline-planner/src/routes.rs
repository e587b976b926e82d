use serde::{Deserialize, Serialize};

/// The application's route table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Route {
    Home,
    Flights,
    Hotels,
    Cabs,
    Itinerary,
    Profile,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Flights,
        Route::Hotels,
        Route::Cabs,
        Route::Itinerary,
        Route::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Flights => "/flights",
            Route::Hotels => "/hotels",
            Route::Cabs => "/cabs",
            Route::Itinerary => "/itinerary",
            Route::Profile => "/profile",
        }
    }

    /// Resolve a URL path; unknown paths get no route.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Route::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// The three-way switcher above every search form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchTab {
    Flights,
    Hotels,
    Cabs,
}

impl SearchTab {
    pub const ALL: [SearchTab; 3] = [SearchTab::Flights, SearchTab::Hotels, SearchTab::Cabs];

    pub fn label(&self) -> &'static str {
        match self {
            SearchTab::Flights => "Flights",
            SearchTab::Hotels => "Hotels",
            SearchTab::Cabs => "Cabs",
        }
    }

    /// The results page this tab's search lands on.
    pub fn route(&self) -> Route {
        match self {
            SearchTab::Flights => Route::Flights,
            SearchTab::Hotels => Route::Hotels,
            SearchTab::Cabs => Route::Cabs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::parse("/bookings"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert_eq!(Route::parse("/flights/"), Some(Route::Flights));
        assert_eq!(Route::parse("/"), Some(Route::Home));
    }

    #[test]
    fn test_tab_routes() {
        assert_eq!(SearchTab::Hotels.route(), Route::Hotels);
        assert_eq!(SearchTab::Cabs.label(), "Cabs");
    }
}
