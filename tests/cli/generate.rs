use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const INDEX: &str = r#"
export * from './view'
export * from './button'
export * from './scroll-view'
"#;

const BUTTON: &str = r#"
import { ComponentType } from 'react'
import { StandardProps, CommonEventFunction } from './common'

interface ButtonProps extends StandardProps {
  size?: string
  formType: string
  hoverStartTime?: number
  onGetUserInfo?: CommonEventFunction<ButtonProps.onGetUserInfoEventDetail>
}

declare namespace ButtonProps {
  interface onGetUserInfoEventDetail {
    errMsg: string
  }
}

declare const Button: ComponentType<ButtonProps>
export { Button, ButtonProps }
"#;

const COMMON: &str = r#"
export interface StandardProps {
  id?: string
}
"#;

#[test]
fn test_generates_index_and_components() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("types/index.d.ts", INDEX)?;
    test.write_file("types/button.d.ts", BUTTON)?;
    test.write_file("types/common.d.ts", COMMON)?;
    test.write_file("types/event.d.ts", "export interface BaseEventProps { type: string }")?;
    test.write_file("types/scroll-view.d.ts", "interface ScrollViewProps { scrollTop?: number }")?;

    let output = test.command().arg("types").output()?;

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "types/button.d.ts\ntypes/scroll-view.d.ts\n"
    );

    assert_snapshot!(test.read_file("src/components/Taro__Components.res")?, @r"
    module View = Taro__View
    module Button = Taro__Button
    module Scroll = Taro__Scroll
    ");
    assert_snapshot!(test.read_file("src/components/Taro__Button.res")?, @r#"
    @module("@tarojs/components") @react.component
    external make: (~size: string, ~formType: string=?, ~hoverStartTime: number, ~onGetUserInfo: CommonEventFunction) => React.element = "Text"
    "#);
    assert_snapshot!(test.read_file("src/components/Taro__ScrollView.res")?, @r#"
    @module("@tarojs/components") @react.component
    external make: (~scrollTop: number) => React.element = "Text"
    "#);

    assert!(!test.root().join("src/components/Taro__Common.res").exists());
    assert!(!test.root().join("src/components/Taro__Event.res").exists());

    Ok(())
}

#[test]
fn test_multiple_directories_in_order() -> Result<()> {
    let test = CliTest::with_file("a/view.d.ts", "interface ViewProps {}")?;
    test.write_file("b/image.d.ts", "interface ImageProps { src: string }")?;

    let output = test.command().args(["b", "a"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "b/image.d.ts\na/view.d.ts\n"
    );
    assert!(test.root().join("src/components/Taro__View.res").exists());
    assert!(test.root().join("src/components/Taro__Image.res").exists());

    Ok(())
}

#[test]
fn test_index_only_directory_is_silent() -> Result<()> {
    let test = CliTest::with_file("types/index.d.ts", INDEX)?;

    let output = test.command().arg("types").output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(test.root().join("src/components/Taro__Components.res").exists());

    Ok(())
}

#[test]
fn test_file_without_props_still_generates() -> Result<()> {
    let test = CliTest::with_file("types/slot.d.ts", "declare const Slot: any\nexport { Slot }")?;

    let output = test.command().arg("types").output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("src/components/Taro__Slot.res")?,
        "@module(\"@tarojs/components\") @react.component\n\
         external make: () => React.element = \"Text\""
    );

    Ok(())
}

#[test]
fn test_missing_directory_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("missing").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Failed to list directory: missing"));

    Ok(())
}

#[test]
fn test_parse_error_aborts_run() -> Result<()> {
    let test = CliTest::with_file("types/a.d.ts", "interface AProps {")?;
    test.write_file("types/b.d.ts", "interface BProps { b: string }")?;

    let output = test.command().arg("types").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(String::from_utf8(output.stdout)?, "types/a.d.ts\n");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to parse declaration file"));
    assert!(!test.root().join("src/components/Taro__B.res").exists());

    Ok(())
}

#[test]
fn test_no_arguments_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("Usage:"));

    Ok(())
}
