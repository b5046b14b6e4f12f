use std::fs;

use fix_exceptions_common::{
    document::Document, fix_file, rewriting::named_args::NamedArgsRewriter, state::Config,
    Outcome,
};
use insta::assert_snapshot;
use tempfile::TempDir;

const REPOSITORY: &str = "\
class UserRepository {
  Future<User> fetch(String id) async {
    final response = await client.get('/users/$id');
    if (response.statusCode == 401) {
      throw const UnauthorizedException(message: 'session expired');
    }
    if (response.statusCode != 200) {
      throw ServerException(
        message: 'fetch failed',
        statusCode: response.statusCode,
      );
    }
    return User.fromJson(response.data);
  }

  Either<Failure, User> recover(Object e) {
    if (e is NetworkException) return const Left(NetworkFailure(message: 'offline'));
    return Left(ServerFailure(message: e.toString()));
  }
}
";

fn write_source(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("user_repository.dart");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn fixes_file_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, REPOSITORY);

    let outcome = fix_file(&path, &Config::default()).unwrap();
    assert_eq!(outcome, Outcome::Fixed);

    let fixed = fs::read_to_string(&path).unwrap();
    assert!(fixed.contains("throw const UnauthorizedException('session expired');"));
    assert!(fixed.contains("throw ServerException('fetch failed');"));
    assert!(fixed.contains("return const Left(NetworkFailure('offline'));"));
    assert!(fixed.contains("return Left(ServerFailure(e.toString()));"));
    assert!(!fixed.contains("message:"));
    assert!(!fixed.contains("statusCode: response.statusCode"));
}

#[test]
fn second_run_needs_no_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, REPOSITORY);

    fix_file(&path, &Config::default()).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let outcome = fix_file(&path, &Config::default()).unwrap();
    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn unrelated_file_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let contents = "return Result.ok(data);\n";
    let path = write_source(&dir, contents);

    let outcome = fix_file(&path, &Config::default()).unwrap();
    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn dry_run_does_not_write() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, REPOSITORY);
    let config = Config {
        dry_run: true,
        report_rewrites: true,
    };

    let outcome = fix_file(&path, &config).unwrap();
    assert_eq!(outcome, Outcome::WouldFix);
    assert_eq!(fs::read_to_string(&path).unwrap(), REPOSITORY);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.dart");

    assert!(fix_file(&path, &Config::default()).is_err());
    assert!(!path.exists());
}

#[test]
fn document_applies_rewriter() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "throw CacheException(message: 'stale');");

    let document = Document::load(&path).unwrap();
    assert_eq!(document.path(), path);

    let rewrite = document.apply(&NamedArgsRewriter::new().unwrap());
    assert!(rewrite.changed);
    assert_snapshot!(rewrite.text, @"throw CacheException('stale');");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "throw CacheException(message: 'stale');"
    );
}
