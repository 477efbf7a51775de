//! Demo: builds a small course, drags things around, and searches it.

use course_builder::forms::LinkForm;
use course_builder::gesture::{ModuleDrag, ResourceDrag};
use course_builder::lifecycle::{setup_tracing, BuilderConfig, CourseSystem};
use course_builder::model::{ContentHandle, FileUpload, MediaType, ModuleCreate, ResourceCreate};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = BuilderConfig::load()?;
    info!(?config, "Starting course builder demo");

    let system = CourseSystem::start(&config, Vec::new());
    let client = system.client.clone();

    let span = tracing::info_span!("authoring");
    let (intro, lab) = async {
        let intro = client.create_module(ModuleCreate::new("Intro")).await?;
        let lab = client.create_module(ModuleCreate::new("Lab")).await?;

        client
            .create_resource(ResourceCreate::link(
                "Syllabus",
                "https://example.com/syllabus",
                Some(intro.id),
            ))
            .await?;
        client
            .create_resource(ResourceCreate::file(
                "Intro guide",
                FileUpload::new(
                    "guide.pdf",
                    48_213,
                    MediaType::Pdf,
                    ContentHandle("uploads/guide.pdf".into()),
                ),
                Some(lab.id),
            ))
            .await?;

        let mut form = LinkForm::new(None);
        form.title = "Reading list".into();
        form.url = "https://example.com/reading".into();
        system.submitter().submit_link(&form).await?;

        Ok::<_, Box<dyn std::error::Error>>((intro, lab))
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("dragging");
    async {
        // Drag "Lab" above "Intro".
        let module_count = client.snapshot().await?.modules.len();
        let mut drag = ModuleDrag::start(lab.id, 1);
        if let Some(intent) = drag.hover(intro.id, 0, module_count) {
            client.apply_move(intent).await?;
        }

        // Drop the unassigned reading list into "Intro".
        let snapshot = client.snapshot().await?;
        if let Some(reading) = snapshot.container(None).first() {
            let drag = ResourceDrag::start(reading);
            let outcome = client.apply_move(drag.drop_on(Some(intro.id))).await?;
            info!(?outcome, "Dropped reading list");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let view = client.search("intro").await?;
    for module in &view.modules {
        info!(module = %module.module.name, subtitle = %module.subtitle(), "Search hit");
    }
    for entry in client.outline(Some(intro.id)).await? {
        info!(name = %entry.name, items = entry.item_count, active = entry.active, "Outline");
    }

    drop(client);
    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
