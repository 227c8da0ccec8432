// App module for crime_watch
// Handles application state and navigation

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen};

#[cfg(test)]
pub(crate) mod test_support {
    use super::App;
    use crate::data::test_support::fixed_now;
    use crate::data::{aggregate, generate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub fn sample_app(count: usize) -> App {
        let mut rng = StdRng::seed_from_u64(17);
        let cases = generate(count, fixed_now(), &mut rng);
        let stats = aggregate(&cases, fixed_now(), &mut rng);
        App::new(cases, stats)
    }
}
