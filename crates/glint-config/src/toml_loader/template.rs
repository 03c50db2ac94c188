//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# glint configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[bloom]
# radius = 50            # 1-128 taps on each side of the center
# steepness = 0.08       # 0.001-1.0 soft-clamp steepness
# max = 1.0              # 0.1-4.0 soft-clamp asymptote
# threshold = 0.5        # 0.0-1.0 overflow-to-white threshold

[textures]
# gradient_size = 256    # 1-4096
# gradient_inner_stop = 0.9
# solid_color = "#ff0000"
# solid_width = 64       # 1-4096
# solid_height = 64      # 1-4096

[scroll]
# smooth = 2.0           # 0.0-10.0 seconds, 0 disables smoothing
# content_height = 4000.0
# line_height = 120.0

[window]
# title = "glint"
# width = 1280           # 64-8192
# height = 800           # 64-8192

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
