/*!
# `Return`
Also `Restart`.

## Purpose
Continue after the most recent call.

## Remarks
With no call pending, `Return` goes to the line after the most recent
outermost call, or the first line when there has been none.
`Restart` does nothing.

*/
