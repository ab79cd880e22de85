use crate::client::session_jar::SessionJar;

use reqwest::Url;
use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;

fn api_url() -> Url {
    Url::parse("http://localhost:3000/api/v1/todos").unwrap()
}

fn jar_with_backend_cookie() -> SessionJar {
    let jar = SessionJar::default();
    let set_cookie = HeaderValue::from_static("token=srv; Path=/api/v1");
    jar.set_cookies(&mut std::iter::once(&set_cookie), &api_url());
    jar
}

#[test]
fn test_backend_cookie_is_sent() {
    let jar = jar_with_backend_cookie();

    assert_eq!(
        jar.cookies(&api_url()),
        Some(HeaderValue::from_static("token=srv"))
    );
}

#[test]
fn test_clear_drops_cookie_on_narrower_path() {
    let jar = jar_with_backend_cookie();

    jar.clear();

    assert_eq!(jar.cookies(&api_url()), None);
}

#[test]
fn test_replace_leaves_single_token() {
    let jar = jar_with_backend_cookie();

    jar.replace("token=t1; Path=/", &api_url());

    assert_eq!(
        jar.cookies(&api_url()),
        Some(HeaderValue::from_static("token=t1"))
    );
}
