use meta_core::inputs::{CreateObjectInput, DeleteObjectInput};
use serde::Serialize;

use crate::context::AppContext;
use crate::output::{output, reject};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ObjectSummary<'a> {
    #[serde(flatten)]
    object: &'a meta_core::entities::ObjectMetadata,
    field_count: usize,
}

/// Handle `mfv object create`.
pub fn create(ctx: &mut AppContext, input: CreateObjectInput) -> anyhow::Result<()> {
    match ctx.registry.create_object(input) {
        Ok(object) => {
            ctx.persist()?;
            output(&object, ctx.format)
        }
        Err(error) => reject(&error.to_graphql_errors(), ctx.format),
    }
}

/// Handle `mfv object delete`. Fields of the object go with it.
pub fn delete(ctx: &mut AppContext, input: &DeleteObjectInput) -> anyhow::Result<()> {
    match ctx.registry.delete_object(&input.id_to_delete) {
        Ok(object) => {
            ctx.persist()?;
            output(&object, ctx.format)
        }
        Err(error) => reject(&error.to_graphql_errors(), ctx.format),
    }
}

/// Handle `mfv object get`.
pub fn get(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    match ctx.registry.get_object(id) {
        Ok(object) => output(object, ctx.format),
        Err(error) => reject(&error.to_graphql_errors(), ctx.format),
    }
}

/// Handle `mfv object list`.
pub fn list(ctx: &AppContext) -> anyhow::Result<()> {
    let summaries = ctx
        .registry
        .list_objects()
        .into_iter()
        .map(|object| ObjectSummary {
            object,
            field_count: ctx.registry.fields_of(&object.id).map_or(0, <[_]>::len),
        })
        .collect::<Vec<_>>();
    output(&summaries, ctx.format)
}
