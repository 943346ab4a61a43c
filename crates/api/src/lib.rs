pub mod admin_users;
pub mod auth;
pub mod backend;
pub mod cdn;
pub mod connection;
pub mod dashboard;
pub mod error;
pub mod gyms;
pub mod provinces;
pub mod tags;
pub mod trainers;

use connection::Connection;
use session::Session;

/// Facade over every backend resource, sharing one connection. Mirrors the
/// REST surface: `/api/gyms`, `/api/trainers`, `/api/tags`,
/// `/api/admin-users`, `/api/provinces`, `/api/dashboard/*`.
#[derive(Clone)]
pub struct Api {
    pub auth: auth::Auth,
    pub gyms: gyms::Gyms,
    pub trainers: trainers::Trainers,
    pub tags: tags::Tags,
    pub admin_users: admin_users::AdminUsers,
    pub provinces: provinces::Provinces,
    pub dashboard: dashboard::Dashboard,
}

impl Api {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let conn = Connection::new(base_url, session.clone());
        Api {
            auth: auth::Auth::new(conn.clone(), session),
            gyms: gyms::Gyms::new(conn.clone()),
            trainers: trainers::Trainers::new(conn.clone()),
            tags: tags::Tags::new(conn.clone()),
            admin_users: admin_users::AdminUsers::new(conn.clone()),
            provinces: provinces::Provinces::new(conn.clone()),
            dashboard: dashboard::Dashboard::new(conn),
        }
    }
}
