//! Interactive OAuth 2.0 login for the installed-app flow.
//!
//! Authorization-code flow with PKCE (RFC 7636): build a consent URL,
//! open the browser, receive the redirect on a loopback listener, and
//! exchange the code for a bearer token. Fully blocking, no retries;
//! any failure aborts the login.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use url::Url;

use crate::credentials::ClientSecrets;
use crate::error::{Error, Result};
use crate::types::TokenResponse;

/// Fixed local port the OAuth redirect lands on.
pub const CALLBACK_PORT: u16 = 8080;

/// Full read-write Drive scope.
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";

const SUCCESS_PAGE: &str =
    "<html><body><p>The auth flow is complete; you may close this tab.</p></body></html>";
const DENIED_PAGE: &str =
    "<html><body><p>Authorization was denied; you may close this tab.</p></body></html>";

/// PKCE verifier plus the CSRF state parameter.
///
/// The verifier stays local; only the derived challenge goes into the
/// consent URL.
pub struct PkceVerifier {
    verifier: String,
    state: String,
}

impl PkceVerifier {
    /// Generate a fresh verifier and state from OS randomness.
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();

        // 32 random bytes keep the encoded verifier inside the RFC 7636
        // 43..=128 character window
        let mut verifier_bytes = [0u8; 32];
        rng.fill(&mut verifier_bytes);
        let verifier = URL_SAFE_NO_PAD.encode(verifier_bytes);

        let mut state_bytes = [0u8; 16];
        rng.fill(&mut state_bytes);
        let state = URL_SAFE_NO_PAD.encode(state_bytes);

        Self { verifier, state }
    }

    /// The code verifier sent with the token exchange.
    pub fn verifier(&self) -> &str {
        &self.verifier
    }

    /// The state parameter echoed back by the redirect.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// S256 challenge: BASE64URL(SHA256(verifier)).
    pub fn challenge(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.verifier.as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }
}

impl Default for PkceVerifier {
    fn default() -> Self {
        Self::new()
    }
}

/// What one request against the loopback listener turned out to be.
#[derive(Debug, PartialEq, Eq)]
enum Redirect {
    /// The OAuth callback: authorization code plus echoed state.
    Code { code: String, state: Option<String> },
    /// The provider reported an error (consent denied, bad request).
    Denied(String),
    /// Anything else (favicon and friends); keep listening.
    Unrelated,
}

/// Pick the code/state/error parameters out of an HTTP request line
/// like `GET /?state=xyz&code=4/abc HTTP/1.1`.
fn parse_redirect(request_line: &str) -> Result<Redirect> {
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default();
    let Some(path) = parts.next() else {
        return Err(Error::BadRedirect(format!(
            "not an HTTP request line: {request_line:?}"
        )));
    };
    if method != "GET" {
        return Ok(Redirect::Unrelated);
    }

    // The path is relative; borrow a base so Url can parse the query.
    let url = Url::parse(&format!("http://localhost{path}"))
        .map_err(|e| Error::BadRedirect(format!("unparseable path {path:?}: {e}")))?;

    let mut code = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(reason) = error {
        return Ok(Redirect::Denied(reason));
    }
    match code {
        Some(code) => Ok(Redirect::Code { code, state }),
        None => Ok(Redirect::Unrelated),
    }
}

fn respond(stream: &mut TcpStream, status: &str, body: &str) -> Result<()> {
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes())?;
    Ok(())
}

/// Runs the interactive consent flow against a client-secret
/// configuration and yields a bearer token.
pub struct Authenticator {
    secrets: ClientSecrets,
    scope: String,
    port: u16,
}

impl Authenticator {
    /// Authenticator for the full Drive scope on the fixed local port.
    pub fn new(secrets: ClientSecrets) -> Self {
        Self {
            secrets,
            scope: DRIVE_SCOPE.to_string(),
            port: CALLBACK_PORT,
        }
    }

    /// Override the requested permission scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    fn redirect_uri(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }

    /// Build the consent URL the user has to visit.
    pub fn auth_url(&self, pkce: &PkceVerifier) -> Result<String> {
        let mut url = Url::parse(&self.secrets.installed.auth_uri)
            .map_err(|e| Error::Credentials(format!("invalid auth_uri: {e}")))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("client_id", &self.secrets.installed.client_id);
            query.append_pair("redirect_uri", &self.redirect_uri());
            query.append_pair("response_type", "code");
            query.append_pair("scope", &self.scope);
            query.append_pair("state", pkce.state());
            query.append_pair("code_challenge", &pkce.challenge());
            query.append_pair("code_challenge_method", "S256");
        }

        Ok(url.to_string())
    }

    /// Run the whole interactive flow.
    ///
    /// Opens a listener on the local callback port, launches the browser
    /// (printing the URL as a fallback), blocks until the redirect
    /// arrives, then exchanges the authorization code for a bearer
    /// token. Consent denial, a state mismatch, and any listener or
    /// token-endpoint failure abort the login.
    pub fn login(&self) -> Result<String> {
        let pkce = PkceVerifier::new();
        let auth_url = self.auth_url(&pkce)?;

        // Bind before opening the browser so the redirect cannot race us.
        let listener = TcpListener::bind(("127.0.0.1", self.port))?;

        println!("Please visit this URL:\n{auth_url}\n");
        if let Err(e) = open::that(&auth_url) {
            log::warn!("could not open a browser ({e}); open the URL manually");
        }

        let code = wait_for_code(&listener, pkce.state())?;
        log::debug!("authorization code received, exchanging for token");
        self.exchange_code(&code, pkce.verifier())
    }

    /// Trade the authorization code for an access token.
    fn exchange_code(&self, code: &str, verifier: &str) -> Result<String> {
        let agent = ureq::Agent::new_with_defaults();
        let redirect_uri = self.redirect_uri();

        let token: TokenResponse = agent
            .post(&self.secrets.installed.token_uri)
            .send_form([
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", self.secrets.installed.client_id.as_str()),
                ("client_secret", self.secrets.installed.client_secret.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
                ("code_verifier", verifier),
            ])?
            .body_mut()
            .read_json()?;

        Ok(token.access_token)
    }
}

/// Accept connections until the OAuth callback shows up.
///
/// Browsers poke the listener with unrelated requests (favicon); those
/// get a 404 and the loop continues.
fn wait_for_code(listener: &TcpListener, expected_state: &str) -> Result<String> {
    for stream in listener.incoming() {
        let mut stream = stream?;

        let mut request_line = String::new();
        BufReader::new(&stream).read_line(&mut request_line)?;

        match parse_redirect(&request_line)? {
            Redirect::Code { code, state } => {
                respond(&mut stream, "200 OK", SUCCESS_PAGE)?;
                if state.as_deref() != Some(expected_state) {
                    return Err(Error::StateMismatch);
                }
                return Ok(code);
            }
            Redirect::Denied(reason) => {
                respond(&mut stream, "200 OK", DENIED_PAGE)?;
                return Err(Error::ConsentDenied(reason));
            }
            Redirect::Unrelated => respond(&mut stream, "404 Not Found", "")?,
        }
    }

    Err(Error::BadRedirect(
        "listener closed before a callback arrived".to_string(),
    ))
}
