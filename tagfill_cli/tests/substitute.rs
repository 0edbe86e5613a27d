mod common;

use tagfill_core::AnyEmptyResult;

#[test]
fn file_to_file_substitutes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("template.txt");
	let output = tmp.path().join("generated.txt");

	std::fs::write(&input, "Hello, ${name}!\n")?;

	let mut cmd = common::tagfill_cmd();
	cmd.arg(&input)
		.arg(&output)
		.arg("-Dname=world")
		.assert()
		.success();

	assert_eq!(std::fs::read_to_string(&output)?, "Hello, world!\n");

	Ok(())
}

#[test]
fn stdin_to_stdout_substitutes() -> AnyEmptyResult {
	let mut cmd = common::tagfill_cmd();
	cmd.arg("--stdin")
		.arg("--stdout")
		.arg("-Da=1")
		.write_stdin("x${a}y")
		.assert()
		.success()
		.stdout("x1y");

	Ok(())
}

#[test]
fn stdin_with_positional_output_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let output = tmp.path().join("generated.txt");

	let mut cmd = common::tagfill_cmd();
	cmd.arg("--stdin")
		.arg(&output)
		.arg("-Dname=world")
		.write_stdin("Hello, ${name}!")
		.assert()
		.success();

	assert_eq!(std::fs::read_to_string(&output)?, "Hello, world!");

	Ok(())
}

#[test]
fn custom_tags_substitute() -> AnyEmptyResult {
	let mut cmd = common::tagfill_cmd();
	cmd.arg("--stdin")
		.arg("--stdout")
		.arg("--begin-tag")
		.arg("{%")
		.arg("--end-tag")
		.arg("%}")
		.arg("-Da=1")
		.write_stdin("x{%a%}y ${a}")
		.assert()
		.success()
		.stdout("x1y ${a}");

	Ok(())
}

#[test]
fn sanitize_mode_passes_unknown_markers_through() -> AnyEmptyResult {
	let mut cmd = common::tagfill_cmd();
	cmd.arg("--stdin")
		.arg("--stdout")
		.arg("--error-mode")
		.arg("sanitize")
		.arg("--no-system-properties")
		.arg("--no-environment-variables")
		.write_stdin("x${missing}y")
		.assert()
		.success()
		.stdout("x${missing}y");

	Ok(())
}

#[test]
fn strip_mode_erases_unknown_markers() -> AnyEmptyResult {
	let mut cmd = common::tagfill_cmd();
	cmd.arg("--stdin")
		.arg("--stdout")
		.arg("--error-mode")
		.arg("strip")
		.arg("--no-system-properties")
		.arg("--no-environment-variables")
		.write_stdin("x${missing}y")
		.assert()
		.success()
		.stdout("xy");

	Ok(())
}

#[test]
fn bare_define_is_the_empty_string() -> AnyEmptyResult {
	let mut cmd = common::tagfill_cmd();
	cmd.arg("--stdin")
		.arg("--stdout")
		.arg("-Dflag")
		.write_stdin("a${flag}b")
		.assert()
		.success()
		.stdout("ab");

	Ok(())
}

#[test]
fn multibyte_content_streams_through() -> AnyEmptyResult {
	let mut cmd = common::tagfill_cmd();
	cmd.arg("--stdin")
		.arg("--stdout")
		.arg("-Dname=wörld")
		.write_stdin("héllo ${name} ☃")
		.assert()
		.success()
		.stdout("héllo wörld ☃");

	Ok(())
}

#[test]
fn partial_tag_prefix_passes_through_unchanged() -> AnyEmptyResult {
	let mut cmd = common::tagfill_cmd();
	cmd.arg("--stdin")
		.arg("--stdout")
		.write_stdin("test$0")
		.assert()
		.success()
		.stdout("test$0");

	Ok(())
}
