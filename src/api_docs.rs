use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::heroes::list_heroes,
        api::heroes::get_hero,
        api::powers::list_powers,
        api::powers::get_power,
        api::powers::update_power,
        api::hero_powers::create_hero_power,
    ),
    tags(
        (name = "superheroes", description = "Superheroes API")
    )
)]
pub struct ApiDoc;
