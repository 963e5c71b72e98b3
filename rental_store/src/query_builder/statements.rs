//! Fixed-shape statements
//!
//! Every statement here takes its values as positional parameters in the
//! order documented on each constant.

/// `$1` email
pub const USER_BY_EMAIL: &str = "SELECT * FROM users WHERE email = $1";

/// `$1` user id
pub const USER_BY_ID: &str = "SELECT * FROM users WHERE id = $1";

/// `$1` name, `$2` email, `$3` password
pub const INSERT_USER: &str =
    "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *";

/// Past reservations of a guest with the reserved property's mean rating
///
/// `$1` guest id, `$2` limit
pub const RESERVATIONS_FOR_GUEST: &str = "SELECT reservations.id, properties.title, \
reservations.start_date, reservations.end_date, \
avg(property_reviews.rating)::float8 AS average_rating
FROM reservations
JOIN properties ON properties.id = reservations.property_id
JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE reservations.guest_id = $1
AND reservations.end_date < now()::date
GROUP BY properties.id, reservations.id
ORDER BY reservations.start_date
LIMIT $2";

/// Columns bound by [`INSERT_PROPERTY`], in placeholder order
pub const PROPERTY_INSERT_COLUMNS: [&str; 14] = [
    "owner_id",
    "title",
    "description",
    "thumbnail_photo_url",
    "cover_photo_url",
    "cost_per_night",
    "street",
    "city",
    "province",
    "post_code",
    "country",
    "parking_spaces",
    "number_of_bathrooms",
    "number_of_bedrooms",
];

/// `$1..$14` follow [`PROPERTY_INSERT_COLUMNS`]
pub const INSERT_PROPERTY: &str = "INSERT INTO properties (owner_id, title, description, \
thumbnail_photo_url, cover_photo_url, cost_per_night, street, city, province, post_code, \
country, parking_spaces, number_of_bathrooms, number_of_bedrooms) \
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) RETURNING *";
