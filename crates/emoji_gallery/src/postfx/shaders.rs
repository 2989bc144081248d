//! GLSL sources for the full-screen color grades
//!
//! Compilation and binding are the host's job; the library only ships
//! the sources and the uniform name the sepia grade expects.

/// Shared full-screen vertex shader
pub const FULLSCREEN_VERT: &str = r"
#version 130
in vec2 position;
in vec2 uv;
out vec2 v_uv;

void main() {
    gl_Position = vec4(position, 0.0, 1.0);
    v_uv = uv;
}
";

/// Luma-weighted grayscale fragment shader
pub const GRAYSCALE_FRAG: &str = r"
#version 130
in vec2 v_uv;
out vec4 fragColor;
uniform sampler2D tex;

void main() {
    vec3 color = texture(tex, v_uv).rgb;
    float gray = dot(color, vec3(0.299, 0.587, 0.114));
    fragColor = vec4(vec3(gray), 1.0);
}
";

/// Sepia fragment shader, blended by the `amount` uniform
pub const SEPIA_FRAG: &str = r"
#version 130
in vec2 v_uv;
out vec4 fragColor;
uniform sampler2D tex;
uniform float amount;

void main() {
    vec3 color = texture(tex, v_uv).rgb;
    vec3 sepia_color = vec3(
        dot(color, vec3(0.393, 0.769, 0.189)),
        dot(color, vec3(0.349, 0.686, 0.168)),
        dot(color, vec3(0.272, 0.534, 0.131))
    );
    fragColor = vec4(mix(color, sepia_color, amount), 1.0);
}
";

/// Name of the sepia blend uniform
pub const SEPIA_AMOUNT_UNIFORM: &str = "amount";
