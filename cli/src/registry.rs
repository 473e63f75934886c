use futures::TryStreamExt;

use flightdeck::{admin::{RecordKind, REGISTRY}, traits::Administrable};

pub async fn registry(ctx: flightdeck::Context) -> flightdeck::Result<()> {
	for kind in REGISTRY {
		let count = ctx.count(*kind).await?;
		println!("{:<14} {:<14} {count}", kind.name(), kind.table_name());
	}
	Ok(())
}

pub async fn records(ctx: flightdeck::Context, kind: RecordKind) -> flightdeck::Result<()> {
	let mut stream = ctx.labels(kind).await?;
	while let Some((id, label)) = stream.try_next().await? {
		println!("{id}: {label}");
	}
	Ok(())
}

pub async fn remove(ctx: flightdeck::Context, kind: RecordKind, id: i64) -> flightdeck::Result<()> {
	ctx.remove(kind, id).await
}
