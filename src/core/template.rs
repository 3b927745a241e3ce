use crate::domain::model::{UnitIndex, UnitLayout};

const INPUT_PATH_PLACEHOLDER: &str = "{{INPUT_PATH}}";

/// Entry point written into every unit. The only varying part is the
/// input path, which carries the unit index.
pub const SOURCE_TEMPLATE: &str = r##"
use input;

use std::io;

fn main() -> io::Result<()> {
    let _contents = input::load_file_by_lines("{{INPUT_PATH}}")?;

    Ok(())
}

# [cfg(test)]
mod tests {

    # [test]
    fn test() {

    }
}
"##;

pub fn render_source_stub(layout: &UnitLayout, index: UnitIndex) -> String {
    let input_path = layout.project_relative(index, &layout.data_file);
    SOURCE_TEMPLATE.replace(INPUT_PATH_PLACEHOLDER, &input_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn layout() -> UnitLayout {
        UnitLayout {
            root: PathBuf::from("."),
            src_dir: "src".to_string(),
            dir_prefix: "day".to_string(),
            source_file: "main.rs".to_string(),
            data_file: "input.txt".to_string(),
        }
    }

    #[test]
    fn test_template_has_single_placeholder() {
        assert_eq!(SOURCE_TEMPLATE.matches(INPUT_PATH_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_render_substitutes_input_path() {
        let stub = render_source_stub(&layout(), UnitIndex(9));

        assert!(stub.contains(r#"input::load_file_by_lines("src/day9/input.txt")?;"#));
        assert!(!stub.contains(INPUT_PATH_PLACEHOLDER));
        assert!(stub.contains("fn main() -> io::Result<()>"));
        assert!(stub.contains("# [cfg(test)]"));
    }

    #[test]
    fn test_render_is_fixed_apart_from_the_path() {
        let layout = layout();
        let day3 = render_source_stub(&layout, UnitIndex(3));
        let day21 = render_source_stub(&layout, UnitIndex(21));

        assert_eq!(day3.replace("day3/", "dayN/"), day21.replace("day21/", "dayN/"));
    }

    #[test]
    fn test_render_matches_generated_layout_exactly() {
        let stub = render_source_stub(&layout(), UnitIndex(1));
        let expected = "\nuse input;\n\nuse std::io;\n\n\
fn main() -> io::Result<()> {\n    let _contents = input::load_file_by_lines(\"src/day1/input.txt\")?;\n\n    Ok(())\n}\n\n\
# [cfg(test)]\nmod tests {\n\n    # [test]\n    fn test() {\n\n    }\n}\n";

        assert_eq!(stub, expected);
    }
}
