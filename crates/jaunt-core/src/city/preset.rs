//! Built-in city catalog.
//!
//! Provides the fixed set of cities the game ships with. Point IDs are
//! generated fresh each process; only names are stable across runs.

use super::model::{City, PointOfInterest, Task};

/// Returns the built-in city catalog: four cities, ten points each.
pub fn builtin_cities() -> Vec<City> {
    vec![
        City::new(
            "Atlanta",
            vec![
                PointOfInterest::new("Georgia Aquarium", Task::new("Take a photo of a fish.")),
                PointOfInterest::new(
                    "Centennial Olympic Park",
                    Task::new("Find the Olympic rings."),
                ),
                PointOfInterest::new("World of Coca-Cola", Task::new("Taste a new soda flavor.")),
                PointOfInterest::new(
                    "Martin Luther King Jr. National Historical Park",
                    Task::new("Recite a quote."),
                ),
                PointOfInterest::new("Piedmont Park", Task::new("Spot a bird species.")),
                PointOfInterest::new("Fox Theatre", Task::new("Find the marquee.")),
                PointOfInterest::new("Atlanta Botanical Garden", Task::new("Identify a flower.")),
                PointOfInterest::new("High Museum of Art", Task::new("Sketch a painting.")),
                PointOfInterest::new(
                    "Zoo Atlanta",
                    Task::new("Count the animals in the enclosure."),
                ),
                PointOfInterest::new("Stone Mountain Park", Task::new("Climb to the top.")),
            ],
        ),
        City::new(
            "Chicago",
            vec![
                PointOfInterest::new("Millennium Park", Task::new("Take a selfie with the Bean.")),
                PointOfInterest::new("Navy Pier", Task::new("Ride the Ferris wheel.")),
                PointOfInterest::new(
                    "Art Institute of Chicago",
                    Task::new("Find a famous painting."),
                ),
                PointOfInterest::new("Willis Tower", Task::new("Step on the glass skydeck.")),
                PointOfInterest::new("Shedd Aquarium", Task::new("Spot a dolphin.")),
                PointOfInterest::new("Lincoln Park Zoo", Task::new("Find the lions.")),
                PointOfInterest::new("Magnificent Mile", Task::new("Buy a souvenir.")),
                PointOfInterest::new("Chicago Riverwalk", Task::new("Count the bridges.")),
                PointOfInterest::new(
                    "Museum of Science and Industry",
                    Task::new("Try an experiment."),
                ),
                PointOfInterest::new("Grant Park", Task::new("Find the Buckingham Fountain.")),
            ],
        ),
        City::new(
            "New York",
            vec![
                PointOfInterest::new("Statue of Liberty", Task::new("Take a photo.")),
                PointOfInterest::new("Central Park", Task::new("Find a hidden statue.")),
                PointOfInterest::new("Times Square", Task::new("Count the billboards.")),
                PointOfInterest::new("Empire State Building", Task::new("Spot the city skyline.")),
                PointOfInterest::new("Brooklyn Bridge", Task::new("Walk across the bridge.")),
                PointOfInterest::new(
                    "Metropolitan Museum of Art",
                    Task::new("Find an ancient artifact."),
                ),
                PointOfInterest::new("9/11 Memorial", Task::new("Reflect at the pools.")),
                PointOfInterest::new("Broadway", Task::new("Name a show.")),
                PointOfInterest::new("High Line", Task::new("Spot a unique plant.")),
                PointOfInterest::new("Rockefeller Center", Task::new("Find the ice rink.")),
            ],
        ),
        City::new(
            "San Francisco",
            vec![
                PointOfInterest::new("Golden Gate Bridge", Task::new("Take a selfie.")),
                PointOfInterest::new("Alcatraz Island", Task::new("Learn a fact.")),
                PointOfInterest::new("Fisherman's Wharf", Task::new("Try clam chowder.")),
                PointOfInterest::new("Chinatown", Task::new("Find a dragon statue.")),
                PointOfInterest::new("Lombard Street", Task::new("Walk the crooked street.")),
                PointOfInterest::new("Coit Tower", Task::new("Spot the murals.")),
                PointOfInterest::new("Pier 39", Task::new("Count the sea lions.")),
                PointOfInterest::new("Union Square", Task::new("Find a street performer.")),
                PointOfInterest::new("Palace of Fine Arts", Task::new("Take a photo.")),
                PointOfInterest::new("Muir Woods", Task::new("Spot a redwood tree.")),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_four_cities_with_ten_points_each() {
        let cities = builtin_cities();
        assert_eq!(cities.len(), 4);
        for city in &cities {
            assert_eq!(
                city.points_of_interest.len(),
                10,
                "city {} should have 10 points",
                city.name
            );
        }
    }

    #[test]
    fn test_catalog_city_names() {
        let names: Vec<String> = builtin_cities().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Atlanta", "Chicago", "New York", "San Francisco"]);
    }

    #[test]
    fn test_catalog_point_ids_are_unique() {
        let cities = builtin_cities();
        let ids: HashSet<String> = cities
            .iter()
            .flat_map(|c| c.points_of_interest.iter().map(|p| p.id.clone()))
            .collect();
        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn test_every_point_has_a_task() {
        for city in builtin_cities() {
            for point in &city.points_of_interest {
                assert!(
                    !point.task.description.is_empty(),
                    "point {} should carry a task",
                    point.name
                );
            }
        }
    }
}
