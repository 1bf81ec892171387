use launchgen_core::{convert_text, LaunchManifest};

#[test]
fn renders_pretty_launch_json() {
    let main = convert_text(
        r#"<component name="ProjectRunConfigurationManager">
  <configuration name="Main" type="Application">
    <option name="PROGRAM_PARAMETERS" value="-x 1" />
    <module name="app" />
    <option name="MAIN_CLASS_NAME" value="com.example.Main" />
    <option name="WORKING_DIRECTORY" value="$PROJECT_DIR$/src/" />
  </configuration>
</component>"#,
        None,
    )
    .unwrap();
    let tool = convert_text(
        r#"<component><configuration name="Tool"><module name="tools" /></configuration></component>"#,
        None,
    )
    .unwrap();

    let manifest = LaunchManifest::new(vec![tool, main]);
    insta::assert_snapshot!(manifest.to_json_pretty().unwrap(), @r###"
    {
      "version": "0.2.0",
      "configurations": [
        {
          "type": "java",
          "name": "Main",
          "request": "launch",
          "cwd": "${workspaceFolder}/src",
          "mainClass": "app/com.example.Main",
          "args": [
            "-x",
            "1"
          ]
        },
        {
          "type": "java",
          "name": "Tool",
          "request": "launch"
        }
      ]
    }
    "###);
}

#[test]
fn empty_program_parameters_render_one_empty_argument() {
    let entry = convert_text(
        r#"<component><configuration name="Empty"><option name="PROGRAM_PARAMETERS" value="" /></configuration></component>"#,
        None,
    )
    .unwrap();

    assert_eq!(
        serde_json::to_string(&entry).unwrap(),
        r#"{"type":"java","name":"Empty","request":"launch","args":[""]}"#
    );
}

#[test]
fn repeated_options_keep_the_last_value() {
    let entry = convert_text(
        r#"<component><configuration name="Twice">
  <option name="WORKING_DIRECTORY" value="/first" />
  <option name="MAIN_CLASS_NAME" value="First" />
  <option name="WORKING_DIRECTORY" value="/second/" />
  <option name="MAIN_CLASS_NAME" value="Second" />
</configuration></component>"#,
        None,
    )
    .unwrap();

    assert_eq!(entry.cwd.as_deref(), Some("/second"));
    assert_eq!(entry.main_class.as_deref(), Some("Second"));
}
