use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use material_showcase::animation::{advance_rotation, run_frame};
use material_showcase::geometry::ShapeDescriptor;
use material_showcase::mesh::tessellate;
use material_showcase::traits::{RenderEngine, SceneView};
use material_showcase::{
    GeometryCatalog, GlobalControlState, InstanceId, MaterialCatalog, OrbitCamera,
    RenderableInstance, SceneComposer, Shape,
};

/// Engine that only walks the view, so the bench measures the frame step itself
struct NullEngine;

impl RenderEngine for NullEngine {
    type Error = std::convert::Infallible;

    fn add_instance(&mut self, _: &RenderableInstance, _: &ShapeDescriptor) {}

    fn remove_instance(&mut self, _: InstanceId) {}

    fn draw(&mut self, view: &SceneView<'_>) -> Result<(), Self::Error> {
        for instance in view.instances {
            black_box(instance.model_matrix());
        }
        Ok(())
    }

    fn resize(&mut self, _: u32, _: u32) {}
}

fn visible_set(shape: Shape) -> (Vec<RenderableInstance>, MaterialCatalog) {
    let materials = MaterialCatalog::new();
    let mut composer = SceneComposer::new();
    composer.activate(shape, &materials, &mut NullEngine);
    (composer.visible().to_vec(), materials)
}

fn bench_advance_rotation(c: &mut Criterion) {
    let (mut instances, _) = visible_set(Shape::Sphere);
    let controls = GlobalControlState::default();

    c.bench_function("advance_rotation", |b| {
        b.iter(|| advance_rotation(black_box(&mut instances), black_box(&controls)))
    });
}

fn bench_run_frame(c: &mut Criterion) {
    let (mut instances, materials) = visible_set(Shape::TorusKnot);
    let controls = GlobalControlState::default();
    let mut camera = OrbitCamera::new(800, 600);
    let mut engine = NullEngine;

    c.bench_function("run_frame", |b| {
        b.iter(|| run_frame(&mut instances, &controls, &materials, &mut engine, &mut camera))
    });
}

fn bench_shape_switch(c: &mut Criterion) {
    let materials = MaterialCatalog::new();
    let mut composer = SceneComposer::new();

    c.bench_function("shape_switch", |b| {
        let mut shapes = Shape::ALL.iter().cycle();
        b.iter(|| {
            if let Some(&shape) = shapes.next() {
                composer.activate(shape, &materials, &mut NullEngine);
            }
        })
    });
}

fn bench_tessellate(c: &mut Criterion) {
    let catalog = GeometryCatalog::new();
    let mut group = c.benchmark_group("tessellate");

    for descriptor in catalog.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(descriptor.name()),
            &descriptor.primitive,
            |b, primitive| b.iter(|| tessellate(black_box(primitive))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_advance_rotation,
    bench_run_frame,
    bench_shape_switch,
    bench_tessellate,
);

criterion_main!(benches);
