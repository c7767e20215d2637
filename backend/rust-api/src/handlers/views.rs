use axum::response::{Html, Redirect};

/// GET / - The root renders nothing of its own
pub async fn root() -> Redirect {
    Redirect::to("/login")
}

/// GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// GET /register
pub async fn register_page() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Sign in · QuizDeck</title>
  </head>
  <body>
    <h1>Sign in</h1>
    <p>POST your credentials as JSON to <code>/api/v1/auth/login</code>.</p>
    <p><a href="/register">Create an account</a></p>
  </body>
</html>
"#;

const REGISTER_PAGE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Create account · QuizDeck</title>
  </head>
  <body>
    <h1>Create account</h1>
    <p>POST email, name and password as JSON to <code>/api/v1/auth/register</code>.</p>
    <p><a href="/login">Back to sign in</a></p>
  </body>
</html>
"#;
