use crate::{
    model::academic_semester::{CreateAcademicSemesterDto, UpdateAcademicSemesterDto},
    server::{
        model::academic_semester::{MONTHS, SEMESTER_CODES, SEMESTER_TITLES},
        schema::{ObjectSchema, RequestSchema, Rule},
    },
};

impl RequestSchema for CreateAcademicSemesterDto {
    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .required("title", Rule::OneOf(SEMESTER_TITLES), "Title is required")
            .required("year", Rule::Integer, "Year is required")
            .required("code", Rule::OneOf(SEMESTER_CODES), "Code is required")
            .required("startMonth", Rule::OneOf(MONTHS), "Start month is required")
            .required("endMonth", Rule::OneOf(MONTHS), "End month is required")
    }
}

impl RequestSchema for UpdateAcademicSemesterDto {
    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .optional("title", Rule::OneOf(SEMESTER_TITLES))
            .optional("year", Rule::Integer)
            .optional("code", Rule::OneOf(SEMESTER_CODES))
            .optional("startMonth", Rule::OneOf(MONTHS))
            .optional("endMonth", Rule::OneOf(MONTHS))
            .refine(
                |body| present(body, "title") == present(body, "code"),
                "Either both title and code should be provided or neither",
            )
    }
}

fn present(body: &serde_json::Map<String, serde_json::Value>, key: &str) -> bool {
    body.get(key).is_some_and(|value| !value.is_null())
}
