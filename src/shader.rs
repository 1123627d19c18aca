//! WGSL source for the stage's sprite pipeline.
//!
//! One pipeline draws everything: each instance is an oriented rectangle
//! that renders either as a solid quad (`shape == 0`) or a circle-masked dot
//! with a soft edge (`shape == 1`). Instance coordinates are physical pixels
//! with the origin at the window's top left; the vertex stage converts to
//! clip space using the screen size uniform.

pub const SPRITE_SHADER: &str = r#"
struct StageUniforms {
    screen: vec2<f32>,
    time: f32,
    _pad: f32,
};

@group(0) @binding(0)
var<uniform> stage: StageUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
    @location(1) uv: vec2<f32>,
    @location(2) shape: f32,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) half_extent: vec2<f32>,
    @location(2) rotation: f32,
    @location(3) shape: f32,
    @location(4) color: vec4<f32>,
) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let corner = corners[vertex_index];
    let local = corner * half_extent;
    let c = cos(rotation);
    let s = sin(rotation);
    let rotated = vec2<f32>(local.x * c - local.y * s, local.x * s + local.y * c);
    let pixel = center + rotated;

    let ndc = vec2<f32>(
        pixel.x / stage.screen.x * 2.0 - 1.0,
        1.0 - pixel.y / stage.screen.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = color;
    out.uv = corner;
    out.shape = shape;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    var alpha = in.color.a;
    if in.shape > 0.5 {
        let dist = length(in.uv);
        if dist > 1.0 {
            discard;
        }
        alpha = alpha * (1.0 - smoothstep(0.85, 1.0, dist));
    }
    return vec4<f32>(in.color.rgb, alpha);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_shader_parses_as_wgsl() {
        naga::front::wgsl::parse_str(SPRITE_SHADER).expect("sprite shader must parse");
    }
}
