//! Typed wrappers over the SmartSeat backend endpoints.
//!
//! Every call except `login` goes through `AuthClient::request`, so bearer
//! injection and 401 handling apply uniformly. Non-2xx answers surface as
//! `ApiError::Status` for the page to report.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::auth_client::{AuthClient, decode_success};
use super::transport::{HttpTransport, RequestOptions};
use super::types::{LoginRequest, Reservation, ReservationCreate, Seat, TokenResponse};
use crate::error::ApiError;
use crate::util::navigate::Navigator;
use crate::util::storage::KeyValueStore;

const LOGIN_ENDPOINT: &str = "/api/auth/login";
const SEATS_ENDPOINT: &str = "/api/seats";
const RESERVATIONS_ENDPOINT: &str = "/api/reservations";
const MY_RESERVATIONS_ENDPOINT: &str = "/api/reservations/mine";

fn reservation_endpoint(reservation_id: i64) -> String {
    format!("{RESERVATIONS_ENDPOINT}/{reservation_id}")
}

impl<T, S, N> AuthClient<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStore,
    N: Navigator,
{
    /// Exchange credentials for a token via `POST /api/auth/login` and store it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for rejected credentials, or any
    /// other request/decode failure. A rejection does not redirect, so the
    /// sign-in page can report it.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let payload = LoginRequest {
            email: email.trim().to_ascii_lowercase(),
            password: password.to_owned(),
        };
        let resp = self
            .request_unguarded(LOGIN_ENDPOINT, RequestOptions::post_json(&payload)?)
            .await?;
        if resp.status == 401 {
            log::warn!("login rejected");
            return Err(ApiError::Unauthorized);
        }
        let body: TokenResponse = decode_success(&resp)?;
        self.set_token(&body.token);
        Ok(())
    }

    /// List all seats via `GET /api/seats`.
    ///
    /// # Errors
    ///
    /// Returns the request or decode failure.
    pub async fn list_seats(&self) -> Result<Vec<Seat>, ApiError> {
        self.get_json(SEATS_ENDPOINT).await
    }

    /// Reserve `seat_code` via `POST /api/reservations`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status(409)` when the seat is already booked, or
    /// any other request/decode failure.
    pub async fn create_reservation(&self, seat_code: &str) -> Result<Reservation, ApiError> {
        let payload = ReservationCreate {
            seat_code: seat_code.to_owned(),
        };
        self.post_json(RESERVATIONS_ENDPOINT, &payload).await
    }

    /// The signed-in user's reservations, newest first.
    ///
    /// # Errors
    ///
    /// Returns the request or decode failure.
    pub async fn my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get_json(MY_RESERVATIONS_ENDPOINT).await
    }

    /// Cancel a reservation via `DELETE /api/reservations/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status(404)` for unknown reservations, or the
    /// request failure.
    pub async fn cancel_reservation(&self, reservation_id: i64) -> Result<(), ApiError> {
        self.delete(&reservation_endpoint(reservation_id)).await
    }
}
