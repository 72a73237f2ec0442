//! Tests for the routing system
//!
//! Validates route paths, navbar composition and which routes render
//! without the navigation chrome.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests the paths each route is mounted at
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Signup.to_path(), "/signup");
        assert_eq!(MainRoute::Chatbot.to_path(), "/chatbot");
        assert_eq!(MainRoute::GoogleCallback.to_path(), "/auth/google/callback");
    }

    /// Tests that paths resolve back to their routes
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/signup"), Some(MainRoute::Signup));
        assert_eq!(MainRoute::recognize("/chatbot"), Some(MainRoute::Chatbot));
        assert_eq!(
            MainRoute::recognize("/auth/google/callback"),
            Some(MainRoute::GoogleCallback)
        );
    }

    /// Tests navbar links and their order
    #[test]
    fn test_nav_links() {
        assert_eq!(
            MainRoute::nav_links(),
            vec![
                MainRoute::Home,
                MainRoute::Workouts,
                MainRoute::Diet,
                MainRoute::Chatbot,
                MainRoute::Analytics,
                MainRoute::Profile,
            ]
        );
        for route in MainRoute::nav_links() {
            assert!(route.nav_key().is_some_and(|key| key.starts_with("nav.")));
        }
    }

    /// Tests which routes are hidden once signed in
    #[test]
    fn test_guest_only_routes() {
        let guest_only: Vec<MainRoute> = MainRoute::iter().filter(|r| r.guest_only()).collect();
        assert_eq!(guest_only, vec![MainRoute::Login, MainRoute::Signup]);
    }

    /// Tests that auth screens render without the navbar
    #[test]
    fn test_full_screen_routes() {
        assert!(MainRoute::Login.full_screen());
        assert!(MainRoute::GoogleCallback.full_screen());
        assert!(!MainRoute::Home.full_screen());
        assert!(!MainRoute::Chatbot.full_screen());
        assert!(!MainRoute::NotFound.full_screen());
    }
}
