//! HTML bodies for every page the application serves.

use rand::Rng;

pub(crate) const NOT_FOUND_BODY: &str = "Page not found - 404";

/// Decorative images for the members area, served by the static asset host.
pub(crate) const MEMBER_ASSETS: [&str; 3] = [
    "/happy-happy-happy-happy.gif",
    "/hug.gif",
    "/cat-wave.gif",
];

/// Uniform choice over the fixed asset set. The injected source keeps the
/// selection deterministic under test.
pub(crate) fn pick_asset<R: Rng>(rng: &mut R) -> &'static str {
    MEMBER_ASSETS[rng.gen_range(0..MEMBER_ASSETS.len())]
}

pub(crate) fn home_page() -> String {
    r"
    <h1>Welcome!</h1>
    <p>This is the home page!  What would you like to do?</p>

    <form action='/signup' method='get'>
      <button>Sign up</button>
    </form>

    <form action='/login' method='get'>
      <button>Log in</button>
    </form>
    "
    .to_string()
}

pub(crate) fn home_page_authenticated(username: &str) -> String {
    format!(
        r"
    Hello, {username}!

    <form action='/members' method='get'>
      <button>Go to Members Area</button>
    </form>

    <form action='/logout' method='get'>
      <button>Log out</button>
    </form>
    "
    )
}

pub(crate) fn signup_page() -> String {
    r"
  create user
    <form action='/signupSubmit' method='post'>
      <input name='username' type='text' placeholder='name'>
      <br>
      <input name='email' type='text' placeholder='email'>
      <br>
      <input name='password' type='password' placeholder='password'>
      <br>
      <button>Submit</button>
    </form>
    "
    .to_string()
}

pub(crate) fn login_page() -> String {
    r"
  Log in
    <form action='/loginSubmit' method='post'>
      <input name='email' type='text' placeholder='email'>
      <br>
      <input name='password' type='password' placeholder='password'>
      <br>
      <button>Submit</button>
    </form>
    "
    .to_string()
}

pub(crate) fn members_page(username: &str, asset: &str) -> String {
    format!(
        r"
    Hello, {username}!

    <br><br><img src='{asset}' style='width:250px;'>

    <form action='/logout' method='get'>
      <button>Log out</button>
    </form>
    "
    )
}

/// Field-specific signup error, e.g. "Name is required."
pub(crate) fn missing_field_page(field_label: &str) -> String {
    format!(r#"{field_label} is required.<br><br><a href="/signup">Try again</a>"#)
}

pub(crate) fn email_taken_page() -> String {
    r#"Email already registered.<br><br><a href="/signup">Try again</a>"#.to_string()
}

/// One generic page for unknown email and wrong password alike.
pub(crate) fn invalid_combination_page() -> String {
    r#"Invalid email/password combination<br><br><a href="/login">Try again</a>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pick_asset_stays_in_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let asset = pick_asset(&mut rng);
            assert!(MEMBER_ASSETS.contains(&asset));
        }
    }

    #[test]
    fn pick_asset_deterministic_under_seed() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(pick_asset(&mut first), pick_asset(&mut second));
        }
    }

    #[test]
    fn pick_asset_covers_all_choices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let asset = pick_asset(&mut rng);
            let index = MEMBER_ASSETS.iter().position(|a| *a == asset).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn members_page_is_personalized() {
        let page = members_page("alice", "/hug.gif");
        assert!(page.contains("Hello, alice!"));
        assert!(page.contains("src='/hug.gif'"));
    }

    #[test]
    fn missing_field_page_names_the_field() {
        let page = missing_field_page("Email");
        assert!(page.starts_with("Email is required."));
        assert!(page.contains(r#"<a href="/signup">"#));
    }

    #[test]
    fn invalid_combination_page_links_back_to_login() {
        let page = invalid_combination_page();
        assert!(page.contains("Invalid email/password combination"));
        assert!(page.contains(r#"<a href="/login">"#));
    }
}
