use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
#[schema(as = Item, rename_all = "camelCase")]
pub struct ItemDoc {
    pub id: i32,
    pub name: String,
    pub is_complete: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::hello,
        crate::routes::health,
        crate::routes::items::list,
        crate::routes::items::create,
        crate::routes::items::toggle,
        crate::routes::items::remove,
    ),
    components(
        schemas(
            HealthResponse,
            ItemDoc,
        )
    ),
    tags(
        (name = "root"),
        (name = "health"),
        (name = "items", description = "To-do item management")
    ),
    info(
        title = "ToDo API",
        description = "A web API for managing ToDo items",
        version = "v1"
    )
)]
pub struct ApiDoc;
