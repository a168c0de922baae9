use crate::{
    model::user::CreateUserDto,
    server::schema::{ObjectSchema, RequestSchema, Rule},
};

/// Only shape is checked here; whether a role is present and known is decided by
/// persistence validation when the user is stored.
impl RequestSchema for CreateUserDto {
    fn schema() -> ObjectSchema {
        ObjectSchema::new().required(
            "user",
            Rule::Object(
                ObjectSchema::new()
                    .optional("role", Rule::String)
                    .optional("password", Rule::String),
            ),
            "User is required",
        )
    }
}
